use std::io::Write;

use crate::types::Interval;

pub fn write_json(writer: &mut dyn Write, intervals: &[Interval]) {
    let s = serde_json::to_string(&intervals).unwrap();
    writer.write_all(s.as_bytes()).expect("Unable to write!");
}

// one "[left, right] -> [label, label]" line per interval
pub fn write_text(writer: &mut dyn Write, intervals: &[Interval]) {
    for interval in intervals {
        let line = format!("[{}, {}] -> [{}]\n",
                           interval.left, interval.right,
                           interval.labels.join(", "));
        writer.write_all(line.as_bytes()).expect("Unable to write!");
    }
}
