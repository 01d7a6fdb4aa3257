use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::time::Instant;

use typed_builder::TypedBuilder;

use crate::alphabet::normalize;

/// The ordered store of original terms. Trie leaves hold `u32` indices into
/// this arena; nothing else ever points back at the strings.
#[derive(Debug, Default)]
pub struct Dictionary {
    entries: Vec<String>,
}

impl Dictionary {
    pub fn new() -> Dictionary {
        Dictionary::default()
    }

    /// Appends a term and returns its index: insertion order is identity.
    pub fn push(&mut self, term: &str) -> u32 {
        self.entries.push(term.to_string());
        (self.entries.len() - 1) as u32
    }

    pub fn get(&self, index: u32) -> Option<&str> {
        self.entries.get(index as usize).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Reads one term per record from `filename`, lower-casing as it goes.
    pub fn from_file(filename: &str, format: FileFormat) -> io::Result<Dictionary> {
        println!("Reading words from {:#?}", &filename);

        let file = File::open(filename)?;
        let lines = BufReader::new(file).lines().map_while(Result::ok);

        let start = Instant::now();
        let dict = Self::from_lines(lines, &format);
        println!(
            "Read {} words in {}s",
            dict.len(),
            start.elapsed().as_millis() as f64 / 1000.0
        );
        Ok(dict)
    }

    /// Loader core, split out so tests can feed lines directly. Lines the
    /// format can't split are skipped and counted.
    pub fn from_lines<I, S>(lines: I, format: &FileFormat) -> Dictionary
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut dict = Dictionary::new();
        let mut failures: usize = 0;

        for line in lines {
            let line = line.as_ref().trim();
            if line.is_empty() {
                continue;
            }
            match format.parse_line(line) {
                Some(word) => {
                    dict.push(&normalize(word));
                }
                None => failures += 1,
            }
        }

        if failures > 0 {
            println!("{} lines skipped (missing word column)", failures);
        }
        dict
    }
}

/// Word-list shape: plain one-word-per-line by default, or columnar with a
/// delimiter and a word column.
#[derive(TypedBuilder)]
pub struct FileFormat {
    #[builder(default, setter(strip_option))]
    delimiter: Option<char>,
    #[builder(default, setter(strip_option))]
    word_column: Option<usize>,
}

impl FileFormat {
    fn parse_line<'a>(&self, line: &'a str) -> Option<&'a str> {
        match self.delimiter {
            None => Some(line),
            Some(delimiter) => line
                .split(delimiter)
                .nth(self.word_column.unwrap_or(0)),
        }
    }
}
