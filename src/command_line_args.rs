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

use std::env;
use std::io;
use std::process;

use argparse::{ArgumentParser, Store, StoreTrue};
use arm_rules::transaction_reader::Delimiter;
use arm_rules::{Algorithm, MiningConfig};

pub struct Arguments {
    pub input_file_path: String,
    pub output_rules_path: String,
    pub delimiter: Delimiter,
    pub compare: bool,
    pub config: MiningConfig,
}

pub fn parse_args_or_exit() -> Arguments {
    let mut input_file_path = String::new();
    let mut output_rules_path = String::new();
    let mut min_support: f64 = 0.0;
    let mut min_confidence: f64 = 0.0;
    let mut algorithm = Algorithm::default();
    let mut delimiter = Delimiter::Comma;
    let mut compare = false;

    {
        let mut parser = ArgumentParser::new();
        parser.set_description("Frequent itemset and association rule miner.");

        parser
            .refer(&mut input_file_path)
            .add_option(
                &["--input"],
                Store,
                "Input dataset, one transaction per line.",
            )
            .metavar("file_path")
            .required();

        parser
            .refer(&mut output_rules_path)
            .add_option(
                &["--output"],
                Store,
                "File path in which to store output rules. Format: antecedent, \
                 consequent, support, confidence, lift, leverage, conviction, cosine.",
            )
            .metavar("file_path")
            .required();

        parser
            .refer(&mut min_support)
            .add_option(
                &["--min-support"],
                Store,
                "Minimum itemset support threshold, in range (0,1].",
            )
            .metavar("threshold")
            .required();

        parser
            .refer(&mut min_confidence)
            .add_option(
                &["--min-confidence"],
                Store,
                "Minimum rule confidence threshold, in range [0,1].",
            )
            .metavar("threshold")
            .required();

        parser
            .refer(&mut algorithm)
            .add_option(
                &["--algorithm"],
                Store,
                "Mining strategy: apriori-index (default), apriori-hash or eclat.",
            )
            .metavar("name");

        parser
            .refer(&mut delimiter)
            .add_option(
                &["--delimiter"],
                Store,
                "Item separator in the input: comma (default) or whitespace.",
            )
            .metavar("name");

        parser.refer(&mut compare).add_option(
            &["--compare"],
            StoreTrue,
            "Also run every other strategy and check they find the same itemsets.",
        );

        if env::args().count() == 1 {
            parser.print_help("Usage:", &mut io::stderr()).unwrap();
            process::exit(1);
        }

        match parser.parse_args() {
            Ok(()) => {}
            Err(err) => {
                process::exit(err);
            }
        }
    }

    let config = match MiningConfig::new(min_support, min_confidence, algorithm) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{}", err);
            process::exit(1);
        }
    };

    Arguments {
        input_file_path,
        output_rules_path,
        delimiter,
        compare,
        config,
    }
}
