#![cfg(all(feature = "sequence", feature = "compose"))]
//! Integration tests for seqpipe.
//!
//! These tests build complete pipelines out of several combinators and
//! check them against worked examples, exercising the public API across
//! module boundaries.

use rstest::rstest;
use seqpipe::pipe;
use seqpipe::prelude::*;
use std::collections::{BTreeMap, HashMap};

// =============================================================================
// Grouped answers: nested parsing, flatten, distinct counting
// =============================================================================

const GROUPED_ANSWERS: &str = "abc\n\na\nb\nc\n\nab\nac\n\na\na\na\na\n\nb";

/// Questions answered by every member of a group.
fn common_answers<'a>(group: &[Vec<&'a str>]) -> Vec<&'a str> {
    let Some((head, rest)) = group.split_first() else {
        return Vec::new();
    };
    let answered_by_everyone =
        |answer: &&'a str| all(|person: &&Vec<&'a str>| person.contains(answer))(rest);
    collect_to_array(filter(answered_by_everyone)(head.clone()))
}

#[rstest]
fn grouped_answers_are_parsed_into_nested_vectors() {
    let parse_groups = pipe!(
        split("\n\n"),
        map(pipe!(
            split("\n"),
            map(pipe!(split(""), collect_to_array)),
            collect_to_array,
        )),
        collect_to_array,
    );

    let groups = parse_groups(GROUPED_ANSWERS);

    assert_eq!(groups.len(), 5);
    assert_eq!(groups[0], vec![vec!["a", "b", "c"]]);
    assert_eq!(groups[2], vec![vec!["a", "b"], vec!["a", "c"]]);
}

#[rstest]
fn grouped_answers_union_and_intersection() {
    let parse_groups = pipe!(
        split("\n\n"),
        map(pipe!(
            split("\n"),
            map(pipe!(split(""), collect_to_array)),
            collect_to_array,
        )),
        collect_to_array,
    );
    let groups = parse_groups(GROUPED_ANSWERS);

    let answered_by_anyone = pipe!(map(pipe!(flatten, remove_duplicates, length)), sum);
    let answered_by_everyone = pipe!(
        map(|group: Vec<Vec<&str>>| length(common_answers(&group))),
        sum,
    );

    assert_eq!(answered_by_anyone(groups.clone()), 11);
    assert_eq!(answered_by_everyone(groups), 6);
}

// =============================================================================
// Memory game: a hand-written infinite sequence consumed with skip + first
// =============================================================================

/// Each turn speaks how many turns ago the previous number was last spoken,
/// or 0 if it was new.
struct MemoryGame {
    seed: Vec<usize>,
    turn: usize,
    previous: Option<usize>,
    last_seen: HashMap<usize, usize>,
}

impl MemoryGame {
    fn new(seed: Vec<usize>) -> Self {
        Self {
            seed,
            turn: 0,
            previous: None,
            last_seen: HashMap::new(),
        }
    }
}

impl Iterator for MemoryGame {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        let spoken = match self.seed.get(self.turn) {
            Some(&value) => value,
            None => self
                .previous
                .and_then(|previous| self.last_seen.get(&previous))
                .map_or(0, |&seen| self.turn - 1 - seen),
        };
        if let Some(previous) = self.previous {
            self.last_seen.insert(previous, self.turn - 1);
        }
        self.previous = Some(spoken);
        self.turn += 1;
        Some(spoken)
    }
}

#[rstest]
fn memory_game_opening_turns() {
    let opening = pipe!(MemoryGame::new, take(10), collect_to_array);
    assert_eq!(opening(vec![0, 3, 6]), vec![0, 3, 6, 0, 3, 3, 1, 0, 4, 0]);
}

#[rstest]
#[case("0,3,6", 436)]
#[case("1,3,2", 1)]
#[case("2,1,3", 10)]
#[case("1,2,3", 27)]
#[case("2,3,1", 78)]
#[case("3,2,1", 438)]
#[case("3,1,2", 1836)]
fn memory_game_2020th_number(#[case] input: &str, #[case] expected: usize) {
    let parse_seed = pipe!(
        split(","),
        map(|field: &str| field.trim().parse::<usize>()),
        collect::<Result<Vec<usize>, _>, _>,
    );
    let spoken_2020th = pipe!(MemoryGame::new, skip(2019), first);

    let seed = parse_seed(input).expect("seed should parse");
    assert_eq!(spoken_2020th(seed), Some(expected));
}

// =============================================================================
// Numeric pipelines over generated sources
// =============================================================================

#[rstest]
fn sum_of_even_squares() {
    let even_squares = pipe!(
        filter(|value: &u32| value % 2 == 0),
        map(|value: u32| value * value),
        sum,
    );

    assert_eq!(even_squares(range(7_u32)), 56);
    assert_eq!(even_squares(range(0_u32)), 0);
}

#[rstest]
fn squares_below_threshold() {
    let squares = pipe!(
        zip_with_index,
        map(|(value, index): (u64, usize)| value * (index as u64 + 1)),
        take_while(|area: &u64| *area < 50),
        collect_to_array,
    );

    // value * (index + 1) == value * value when counting from 1
    assert_eq!(
        squares(range_with(100_u64, RangeOptions::default().start(1))),
        vec![1, 4, 9, 16, 25, 36, 49]
    );
}

#[rstest]
fn gaps_between_sorted_readings() {
    let largest_gap = pipe!(
        aperture,
        map(|(low, high): (i32, i32)| high - low),
        max(|gap: &i32| *gap),
    );

    assert_eq!(largest_gap(vec![1, 4, 5, 11, 12]), Ok(6));
    assert_eq!(
        largest_gap(vec![3]),
        Err(EmptySequenceError { operation: "max" })
    );
}

#[rstest]
fn pair_sums_against_target() {
    let expenses = [1721, 979, 366, 299, 675, 1456];
    let product_of_matching_pair = pipe!(
        filter(|(left, right): &(u32, u32)| left + right == 2020),
        map(|(left, right): (u32, u32)| left * right),
        first,
    );

    assert_eq!(product_of_matching_pair(combinations2(&expenses)), Some(514_579));
}

#[rstest]
fn grid_columns_as_sequences() {
    let parse_rows = pipe!(
        split("\n"),
        map(|line: &str| line.chars().collect::<Vec<char>>()),
        collect_to_array,
    );
    let rows = parse_rows("#.#\n.##\n##.");

    let occupied_per_column = pipe!(
        map(|cells: Vec<char>| length(filter(|cell: &char| *cell == '#')(cells))),
        collect_to_array,
    );

    assert_eq!(occupied_per_column(transpose(&rows)), vec![2, 2, 2]);
    assert_eq!(join("")(column(1, &rows)), ".##");
}

#[rstest]
fn word_frequencies_round_trip_through_entries() {
    let frequencies = pipe!(
        split(" "),
        reduce_with(
            |mut counts: HashMap<String, usize>, word: &str| {
                *counts.entry(word.to_owned()).or_default() += 1;
                counts
            },
            HashMap::new(),
        ),
    );

    let counts = frequencies("to be or not to be");
    let repeated: BTreeMap<String, usize> = from_entries(
        filter(|(_, count): &(&String, &usize)| **count > 1)(entries(&counts))
            .map(|(word, count)| (word.clone(), *count)),
    );

    assert_eq!(repeated.len(), 2);
    assert_eq!(repeated["to"], 2);
    assert_eq!(repeated["be"], 2);
}
