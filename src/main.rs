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

mod command_line_args;

use arm_rules::transaction_reader::read_transactions;
use arm_rules::{
    mine_frequent_itemsets, mine_store, Algorithm, FrequentItemsets, MiningConfig, RuleRecord,
    RuleSummary, TransactionStore,
};
use command_line_args::{parse_args_or_exit, Arguments};
use itertools::Itertools;
use ordered_float::OrderedFloat;
use tracing::info;
use tracing_subscriber::EnvFilter;

use std::error::Error;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::process;
use std::time::Instant;

fn format_metric(value: Option<f64>) -> String {
    match value {
        Some(value) => value.to_string(),
        None => String::new(),
    }
}

fn quote(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}

// Items are space separated within a column. An item holding whitespace or a
// quote is quoted inside the column, and the column is quoted as a whole when
// it holds a comma or a quote.
fn itemset_field(items: &[String]) -> String {
    let joined = items
        .iter()
        .map(|item| {
            if item.contains(|c: char| c.is_whitespace() || c == '"') {
                quote(item)
            } else {
                item.clone()
            }
        })
        .join(" ");
    if joined.contains(|c: char| c == ',' || c == '"') {
        quote(&joined)
    } else {
        joined
    }
}

// Highest confidence first, then highest support, then by items.
fn sort_records(records: &mut Vec<RuleRecord>) {
    records.sort_by(|a, b| {
        OrderedFloat(b.confidence)
            .cmp(&OrderedFloat(a.confidence))
            .then(OrderedFloat(b.support).cmp(&OrderedFloat(a.support)))
            .then_with(|| a.antecedent.cmp(&b.antecedent))
            .then_with(|| a.consequent.cmp(&b.consequent))
    });
}

fn write_rules(path: &str, records: &[RuleRecord]) -> Result<(), Box<dyn Error>> {
    let mut output = BufWriter::new(File::create(path)?);
    writeln!(
        output,
        "antecedent,consequent,support,confidence,lift,leverage,conviction,cosine"
    )?;
    for record in records {
        writeln!(
            output,
            "{},{},{},{},{},{},{},{}",
            itemset_field(&record.antecedent),
            itemset_field(&record.consequent),
            record.support,
            record.confidence,
            format_metric(record.lift),
            format_metric(record.leverage),
            format_metric(record.conviction),
            format_metric(record.cosine),
        )?;
    }
    output.flush()?;
    Ok(())
}

// Reruns the other strategies and fails if any finds different itemsets or
// supports.
fn compare_strategies(
    store: &TransactionStore,
    config: &MiningConfig,
    reference: &FrequentItemsets,
) -> Result<(), Box<dyn Error>> {
    let min_count = config.min_support_count(store.num_transactions());
    for &algorithm in Algorithm::all().iter().filter(|&&a| a != config.algorithm) {
        let timer = Instant::now();
        let frequent = mine_frequent_itemsets(store, min_count, algorithm);
        info!(
            "{} found {} frequent itemsets in {:.3} seconds",
            algorithm,
            frequent.len(),
            timer.elapsed().as_secs_f64()
        );
        let disagrees = frequent.len() != reference.len()
            || reference
                .iter()
                .any(|(itemset, _)| frequent.count(itemset) != reference.count(itemset));
        if disagrees {
            return Err(format!(
                "{} and {} found different frequent itemsets",
                config.algorithm, algorithm
            )
            .into());
        }
    }
    info!("All strategies agree.");
    Ok(())
}

fn mine(args: &Arguments) -> Result<(), Box<dyn Error>> {
    info!("Mining data set: {}", args.input_file_path);
    let start = Instant::now();

    let timer = Instant::now();
    let transactions = read_transactions(&args.input_file_path, args.delimiter)?;
    let store = TransactionStore::new(&transactions);
    info!(
        "Loaded {} transactions over {} items in {:.3} seconds.",
        store.num_transactions(),
        store.itemizer().len(),
        timer.elapsed().as_secs_f64()
    );

    info!("Mining with {}...", args.config.algorithm);
    let timer = Instant::now();
    let (frequent, rules) = mine_store(&store, &args.config);
    info!(
        "Found {} frequent itemsets and {} rules in {:.3} seconds.",
        frequent.len(),
        rules.len(),
        timer.elapsed().as_secs_f64()
    );
    for (size, count) in frequent.size_histogram() {
        info!("  {} itemsets of size {}", count, size);
    }

    if args.compare {
        compare_strategies(&store, &args.config, &frequent)?;
    }

    let mut records: Vec<RuleRecord> = rules
        .iter()
        .map(|rule| rule.to_record(store.itemizer()))
        .collect();
    sort_records(&mut records);
    write_rules(&args.output_rules_path, &records)?;

    let summary = RuleSummary::of(&records);
    info!(
        "Rules: {}, mean support {}, mean confidence {}, mean lift {}, mean cosine {}",
        summary.count,
        format_metric(summary.support.mean),
        format_metric(summary.confidence.mean),
        format_metric(summary.lift.mean),
        format_metric(summary.mean_cosine)
    );
    info!(
        "Total runtime: {:.3} seconds",
        start.elapsed().as_secs_f64()
    );

    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let arguments = parse_args_or_exit();

    if let Err(err) = mine(&arguments) {
        eprintln!("Error: {}", err);
        process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::{format_metric, itemset_field, sort_records};
    use arm_rules::RuleRecord;

    fn record(antecedent: &str, support: f64, confidence: f64) -> RuleRecord {
        RuleRecord {
            antecedent: vec![antecedent.to_owned()],
            consequent: vec!["z".to_owned()],
            support,
            confidence,
            lift: None,
            leverage: None,
            conviction: None,
            cosine: None,
        }
    }

    #[test]
    fn test_sort_records() {
        let mut records = vec![
            record("a", 0.2, 0.5),
            record("b", 0.3, 0.9),
            record("c", 0.4, 0.5),
            record("d", 0.4, 0.5),
        ];
        sort_records(&mut records);
        let order: Vec<&str> = records.iter().map(|r| r.antecedent[0].as_str()).collect();
        assert_eq!(order, vec!["b", "c", "d", "a"]);
    }

    #[test]
    fn test_format_metric() {
        assert_eq!(format_metric(Some(0.5)), "0.5");
        assert_eq!(format_metric(None), "");
    }

    fn owned(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_itemset_field_quoting() {
        assert_eq!(itemset_field(&owned(&["bread", "milk"])), "bread milk");
        assert_eq!(itemset_field(&owned(&["1,5", "milk"])), "\"1,5 milk\"");
        assert_eq!(
            itemset_field(&owned(&["peanut butter", "jam"])),
            "\"\"\"peanut butter\"\" jam\""
        );
        assert_eq!(
            itemset_field(&owned(&["6\"", "nails"])),
            "\"\"\"6\"\"\"\"\"\" nails\""
        );
    }
}
