use std::fs::File;
use std::io::{BufRead, BufReader};

use regex::Regex;

use crate::types::Interval;

/// Parse a line-oriented interval list.  Each non-blank line that doesn't
/// start with "#" is "LEFT RIGHT [LABEL ...]" with whitespace-separated
/// labels.
pub fn parse_text(buf_reader: &mut dyn BufRead) -> Vec<Interval> {
    let mut ret = vec![];

    let line_re = Regex::new(r"^\s*(-?\d+)\s+(-?\d+)\s*(.*)$").unwrap();

    for line_result in buf_reader.lines() {
        let line = line_result.unwrap();
        if line.trim().is_empty() || line.starts_with("#") {
            continue;
        }
        let captures = match line_re.captures(&line) {
            Some(captures) => captures,
            None => panic!("can't parse interval line: {}", line),
        };
        let left = captures.get(1).unwrap().as_str().parse::<i64>().unwrap();
        let right = captures.get(2).unwrap().as_str().parse::<i64>().unwrap();
        let labels = captures.get(3).unwrap().as_str()
            .split_whitespace()
            .map(|label| label.to_owned())
            .collect();
        ret.push(Interval {
            left,
            right,
            labels,
        });
    }

    ret
}

/// Parse a JSON file holding an array of intervals like
/// `[{"left": 0, "right": 4, "labels": ["a"]}, ...]`.
pub fn parse_json(filename: &str) -> Vec<Interval> {
    let file = match File::open(filename) {
        Ok(file) => file,
        Err(err) => {
            panic!("Failed to read {}: {}\n", filename, err)
        }
    };

    let reader = BufReader::new(file);

    let intervals: Vec<Interval> =
        match serde_json::from_reader(reader) {
            Ok(intervals) => intervals,
            Err(err) => {
                panic!("failed to parse {}: {}", filename, err)
            },
        };

    intervals
}

// ".json" files hold a JSON array, anything else is the line format
pub fn read_file(filename: &str) -> Vec<Interval> {
    if filename.ends_with(".json") {
        parse_json(filename)
    } else {
        let file = match File::open(filename) {
            Ok(file) => file,
            Err(err) => {
                panic!("Failed to read {}: {}\n", filename, err)
            }
        };
        let mut reader = BufReader::new(file);
        parse_text(&mut reader)
    }
}
