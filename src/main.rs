extern crate getopts;

extern crate interval_combine;

use std::{env, process};
use getopts::Options;

use std::fs::File;
use std::io::BufWriter;

use interval_combine::merge::combine;
use interval_combine::reader;
use interval_combine::render;

const PKG_NAME: &str = env!("CARGO_PKG_NAME");
const VERSION: &str = env!("CARGO_PKG_VERSION");

fn print_usage(program: &str, opts: Options) {
    let brief = format!("Usage: {} [options]", program);
    print!("{}", opts.usage(&brief));
}

fn main() {
    print!("{} v{}\n", PKG_NAME, VERSION);

    let args: Vec<String> = env::args().collect();
    let mut opts = Options::new();

    opts.optflag("h", "help", "print this help message");
    opts.optopt("a", "list-a-file",
                "First interval list, one \"LEFT RIGHT [LABEL ...]\" per line, or a .json array",
                "FILE");
    opts.optopt("b", "list-b-file",
                "Second interval list, same format", "FILE");
    opts.optopt("o", "output-file",
                "Output JSON file", "FILE");
    opts.optflag("t", "text",
                 "write \"[left, right] -> [labels]\" lines instead of JSON");

    let matches = match opts.parse(&args[1..]) {
        Ok(m) => m,
        Err(f) => panic!("Invalid options\n{}", f)
    };

    let program = args[0].clone();

    if matches.opt_present("help") {
        print_usage(&program, opts);
        process::exit(0);
    }

    if !matches.opt_present("list-a-file") {
        print!("no -a|--list-a-file option\n");
        print_usage(&program, opts);
        process::exit(1);
    }

    if !matches.opt_present("list-b-file") {
        print!("no -b|--list-b-file option\n");
        print_usage(&program, opts);
        process::exit(1);
    }

    if !matches.opt_present("output-file") {
        print!("no -o|--output-file option\n");
        print_usage(&program, opts);
        process::exit(1);
    }

    let list_a_filename = matches.opt_str("a").unwrap();
    let list_b_filename = matches.opt_str("b").unwrap();
    let output_filename = matches.opt_str("o").unwrap();

    let list_a = reader::read_file(&list_a_filename);
    let list_b = reader::read_file(&list_b_filename);

    let combined = combine(list_a, list_b);

    let f = File::create(output_filename).expect("Unable to open file");
    let mut writer = BufWriter::new(&f);

    if matches.opt_present("text") {
        render::write_text(&mut writer, &combined);
    } else {
        render::write_json(&mut writer, &combined);
    }
}
