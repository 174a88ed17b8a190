use std::io::{self, BufRead};
use std::path::Path;

use hanpin_core::{FileDictLoader, MemoryDictLoader, OutputMode, Pinyin, PinyinError};

/// One facade operation with its options resolved.
#[derive(Debug, Clone)]
pub enum Operation {
    Convert { mode: OutputMode },
    Name { mode: OutputMode },
    Phrase { delimiter: String, mode: OutputMode },
    Permalink { delimiter: String },
    Abbr { delimiter: String },
    Sentence { tone: bool },
}

/// Build a converter over `data_dir`. `reload` re-reads the files for every
/// conversion instead of caching them.
pub fn open_pinyin(data_dir: &str, reload: bool) -> Pinyin {
    let dir = Path::new(data_dir);
    if reload {
        Pinyin::new(FileDictLoader::new(dir))
    } else {
        Pinyin::new(MemoryDictLoader::open(dir))
    }
}

/// Run `op` on one line of input and format the result for printing.
pub fn render(pinyin: &Pinyin, op: &Operation, text: &str, json: bool) -> Result<String, PinyinError> {
    let words = match op {
        Operation::Convert { mode } => pinyin.convert(text, *mode),
        Operation::Name { mode } => pinyin.name(text, *mode),
        Operation::Phrase { delimiter, mode } => {
            return Ok(scalar(pinyin.phrase(text, delimiter, *mode), json))
        }
        Operation::Permalink { delimiter } => {
            return Ok(scalar(pinyin.permalink(text, delimiter)?, json))
        }
        Operation::Abbr { delimiter } => return Ok(scalar(pinyin.abbr(text, delimiter), json)),
        Operation::Sentence { tone } => return Ok(scalar(pinyin.sentence(text, *tone), json)),
    };

    if json {
        Ok(serde_json::Value::from(words).to_string())
    } else {
        Ok(words.join(" "))
    }
}

fn scalar(value: String, json: bool) -> String {
    if json {
        serde_json::Value::String(value).to_string()
    } else {
        value
    }
}

/// The text argument, or every line of stdin when it is absent.
pub fn read_inputs(text: Option<String>) -> Vec<String> {
    match text {
        Some(text) => vec![text],
        None => io::stdin()
            .lock()
            .lines()
            .map(|line| die!(line, "Error reading stdin: {}"))
            .collect(),
    }
}

pub fn run_cmd(pinyin: &Pinyin, op: &Operation, text: Option<String>, json: bool) {
    for line in read_inputs(text) {
        let out = die!(render(pinyin, op, &line, json), "Error: {}");
        println!("{out}");
    }
}
