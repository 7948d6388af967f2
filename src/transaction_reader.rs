// Copyright 2018 Chris Pearce
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::error::MiningError;
use std::fs::File;
use std::io;
use std::io::prelude::*;
use std::io::BufReader;
use std::str::FromStr;

/// How items are separated on a transaction line.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Delimiter {
    Comma,
    Whitespace,
}

impl Delimiter {
    fn split(self, line: &str) -> Vec<String> {
        match self {
            Delimiter::Comma => line
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(String::from)
                .collect(),
            Delimiter::Whitespace => line.split_whitespace().map(String::from).collect(),
        }
    }
}

impl FromStr for Delimiter {
    type Err = String;
    fn from_str(s: &str) -> Result<Delimiter, String> {
        match s {
            "comma" => Ok(Delimiter::Comma),
            "whitespace" => Ok(Delimiter::Whitespace),
            _ => Err(format!("unknown delimiter {:?}", s)),
        }
    }
}

/// Reads one transaction per line. Blank lines are skipped.
pub struct TransactionReader<R> {
    reader: R,
    delimiter: Delimiter,
}

impl<R: BufRead> TransactionReader<R> {
    pub fn new(reader: R, delimiter: Delimiter) -> TransactionReader<R> {
        TransactionReader { reader, delimiter }
    }
}

impl<R: BufRead> Iterator for TransactionReader<R> {
    type Item = io::Result<Vec<String>>;
    fn next(&mut self) -> Option<io::Result<Vec<String>>> {
        let mut line = String::new();
        loop {
            line.clear();
            match self.reader.read_line(&mut line) {
                Ok(0) => return None,
                Ok(_) => {}
                Err(err) => return Some(Err(err)),
            }
            let items = self.delimiter.split(&line);
            if !items.is_empty() {
                return Some(Ok(items));
            }
        }
    }
}

pub fn read_transactions(
    path: &str,
    delimiter: Delimiter,
) -> Result<Vec<Vec<String>>, MiningError> {
    let io_error = |source| MiningError::Io {
        path: path.to_owned(),
        source,
    };
    let file = File::open(path).map_err(io_error)?;
    TransactionReader::new(BufReader::new(file), delimiter)
        .collect::<io::Result<Vec<Vec<String>>>>()
        .map_err(io_error)
}
