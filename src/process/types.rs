
/// A labeled span.  `left <= right` is not required: a reversed span is
/// carried through combining unchanged because it can't overlap anything.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Interval {
    pub left: i64,
    pub right: i64,
    pub labels: Vec<String>,
}
