use bitvec::prelude::*;
use itertools::Itertools;
use regex::{Regex};
use rustc_hash::FxHashMap;
use std::iter::zip;

fn gcd(a: u64, b: u64) -> u64 {if b == 0 {a} else {gcd(b, a % b)}}
fn lcm(a: u64, b: u64) -> u64 {a / gcd(a, b) * b}

fn hash(s: &str) -> usize {
    s.bytes().fold(0, |h, b| (h + b as usize) * 17 % 256)
}

fn day1(part: u8, input: &str) -> String {
    let words = ["one", "two", "three", "four", "five", "six", "seven", "eight", "nine"];
    input.trim().lines().map(|line| {
        let digits = line.bytes().enumerate().filter_map(|(ix, byte)| {
            match byte {
                b'0' ..= b'9' => Some((byte - b'0') as u32),
                _ if part == 1 => None,
                _ => words.iter().position(|word| line[ix ..].starts_with(word))
                          .map(|pos| pos as u32 + 1)
            }
        }).collect::<Vec<_>>();
        10 * digits.first().expect(line) + digits.last().unwrap()
    }).sum::<u32>().to_string()
}

fn day2(part: u8, input: &str) -> String {
    let cube_re = Regex::new(r"(\d+) (red|green|blue)").unwrap();
    input.trim().lines().map(|line| {
        let (game, draws) = line.split_once(": ").expect(line);
        let mut maxes = [0u32; 3];
        for m in cube_re.captures_iter(draws) {
            let count = m[1].parse().unwrap();
            let color = match &m[2] {"red" => 0, "green" => 1, "blue" => 2, _ => unreachable!()};
            if maxes[color] < count {maxes[color] = count};
        }

        if part == 1 {
            let id = game.strip_prefix("Game ").expect(line).parse().expect(line);
            if zip(maxes, [12, 13, 14]).all(|(max, limit)| max <= limit) {id} else {0}
        } else {
            maxes.iter().product()
        }
    }).sum::<u32>().to_string()
}

fn day4(part: u8, input: &str) -> String {
    let matches = input.trim().lines().map(|line| {
        let (_, card) = line.split_once(": ").expect(line);
        let (winning, have) = card.split_once(" | ").expect(line);
        let mut is_winning = bitarr![0; 100];
        for num in winning.split_whitespace() {
            is_winning.set(num.parse().expect(num), true);
        }
        have.split_whitespace().filter(|num| is_winning[num.parse::<usize>().expect(num)]).count()
    }).collect::<Vec<_>>();

    if part == 1 {
        matches.iter().map(|&m| if m == 0 {0} else {1 << (m - 1)}).sum::<usize>().to_string()
    } else {
        let mut counts = vec![1; matches.len()];
        for (ix, &m) in matches.iter().enumerate() {
            for offset in 1 ..= m {
                if ix + offset < counts.len() {counts[ix + offset] += counts[ix]};
            }
        }
        counts.iter().sum::<usize>().to_string()
    }
}

fn day6(part: u8, input: &str) -> String {
    let lines = input.trim().lines().map(|line| {
        let (_, nums) = line.split_once(':').expect(line);
        if part == 1 {
            nums.split_whitespace().map(|num| num.parse().expect(num)).collect::<Vec<i64>>()
        } else {
            vec![nums.replace(' ', "").parse().expect(line)]
        }
    }).collect::<Vec<_>>();
    let [times, dists] = &lines[..] else {panic!("expected a time and a distance line")};

    zip(times, dists).map(|(&time, &dist)| {
        // smallest winning hold solves hold * (time - hold) > dist;
        // an exact hit on the record is not a win
        let root = ((time * time - 4 * dist) as f64).sqrt();
        let mut first_win = ((time as f64 - root) / 2.0).ceil() as i64;
        if first_win * (time - first_win) <= dist {first_win += 1};
        time - 2 * first_win + 1
    }).product::<i64>().to_string()
}

fn day8(part: u8, input: &str) -> String {
    let (dirs, node_lines) = input.trim().split_once("\n\n").expect("expected directions, then nodes");
    let node_re = Regex::new(r"(\w{3}) = \((\w{3}), (\w{3})\)").unwrap();
    let nodes: FxHashMap<&str, [&str; 2]> = node_re.captures_iter(node_lines).map(|m|
        (m.get(1).unwrap().as_str(), [m.get(2).unwrap().as_str(), m.get(3).unwrap().as_str()])
    ).collect();

    fn walk<'a>(
        nodes: &FxHashMap<&'a str, [&'a str; 2]>, dirs: &str,
        start: &'a str, done: fn(&str) -> bool
    ) -> u64 {
        let mut node = start;
        let mut steps = 0;
        for dir in dirs.bytes().cycle() {
            node = match dir {
                b'L' => nodes[node][0],
                b'R' => nodes[node][1],
                _ => panic!("unexpected direction '{}'", dir as char)
            };
            steps += 1;
            if done(node) {return steps};
        }
        unreachable!()
    }

    if part == 1 {
        walk(&nodes, dirs, "AAA", |node| node == "ZZZ").to_string()
    } else {
        nodes.keys().filter(|node| node.ends_with('A'))
             .map(|&start| walk(&nodes, dirs, start, |node| node.ends_with('Z')))
             .fold(1, lcm).to_string()
    }
}

fn day9(part: u8, input: &str) -> String {
    input.trim().lines().map(|line| {
        let mut vals = line.split_whitespace().map(|num| num.parse().expect(num)).collect::<Vec<i64>>();
        if part == 2 {vals.reverse()};
        let mut extrapolated = 0;
        while vals.iter().any(|&val| val != 0) {
            extrapolated += vals[vals.len() - 1];
            vals = vals.iter().tuple_windows().map(|(a, b)| b - a).collect();
        }
        extrapolated
    }).sum::<i64>().to_string()
}

fn day11(part: u8, input: &str) -> String {
    let image = input.trim().lines().map(str::as_bytes).collect::<Vec<_>>();
    let expansion: u64 = if part == 1 {2} else {1_000_000};

    let mut row_pos = Vec::with_capacity(image.len());
    let mut coord = 0;
    for row in &image {
        row_pos.push(coord);
        coord += if row.iter().all(|&cell| cell == b'.') {expansion} else {1};
    }
    let mut col_pos = Vec::with_capacity(image[0].len());
    let mut coord = 0;
    for ci in 0 .. image[0].len() {
        col_pos.push(coord);
        coord += if image.iter().all(|row| row[ci] == b'.') {expansion} else {1};
    }

    let galaxies = image.iter().enumerate().flat_map(|(ri, row)|
        row.iter().enumerate().filter(|&(_, &cell)| cell == b'#').map(move |(ci, _)| (ri, ci))
    ).map(|(ri, ci)| (row_pos[ri], col_pos[ci])).collect::<Vec<_>>();

    galaxies.iter().tuple_combinations().map(|(&(r1, c1), &(r2, c2))|
        r1.abs_diff(r2) + c1.abs_diff(c2)
    ).sum::<u64>().to_string()
}

fn day13(part: u8, input: &str) -> String {
    // part 2 wants the mirror line broken by exactly one smudged cell
    let smudges = if part == 1 {0} else {1};
    input.trim().split("\n\n").map(|pattern| {
        let pattern = pattern.lines().map(str::as_bytes).collect::<Vec<_>>();
        let (rows, cols) = (pattern.len(), pattern[0].len());

        if let Some(m) = (1 .. rows).find(|&m| {
            (0 .. m.min(rows - m)).map(|i|
                zip(pattern[m - 1 - i], pattern[m + i]).filter(|&(a, b)| a != b).count()
            ).sum::<usize>() == smudges
        }) {return 100 * m};

        (1 .. cols).find(|&m| {
            (0 .. m.min(cols - m)).map(|i|
                pattern.iter().filter(|row| row[m - 1 - i] != row[m + i]).count()
            ).sum::<usize>() == smudges
        }).unwrap_or_else(|| panic!("no mirror line found"))
    }).sum::<usize>().to_string()
}

fn day15(part: u8, input: &str) -> String {
    let steps = input.trim().split(',');
    if part == 1 {
        steps.map(hash).sum::<usize>().to_string()
    } else {
        let mut boxes: [Vec<(&str, usize)>; 256] = [const {vec![]}; 256];
        for step in steps {
            if let Some(label) = step.strip_suffix('-') {
                boxes[hash(label)].retain(|&(l, _)| l != label);
            } else {
                let (label, focal) = step.split_once('=').expect(step);
                let focal = focal.parse().expect(step);
                let lenses = &mut boxes[hash(label)];
                match lenses.iter().position(|&(l, _)| l == label) {
                    Some(slot) => lenses[slot].1 = focal,
                    None => lenses.push((label, focal))
                }
            }
        }

        boxes.iter().enumerate().flat_map(|(bi, lenses)|
            lenses.iter().enumerate().map(move |(slot, &(_, focal))| (bi + 1) * (slot + 1) * focal)
        ).sum::<usize>().to_string()
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let days: [(usize, fn(u8, &str) -> String); 9] = [
        (1, day1), (2, day2), (4, day4), (6, day6), (8, day8),
        (9, day9), (11, day11), (13, day13), (15, day15)
    ];

    let args = std::env::args().collect::<Vec<_>>();
    let (day_arg, part_arg, fname) = match &args[..] {
        [_, day_arg, part_arg] => (day_arg, part_arg, format!("day{}.in", day_arg)),
        [_, day_arg, test_arg, part_arg] => (day_arg, part_arg, format!("day{}test{}.in", day_arg, test_arg)),
        _ => {
            println!("exactly two or three arguments expected - day number, optionally test number and 1/2 for part");
            std::process::exit(1);
        }
    };

    assert!(part_arg == "1" || part_arg == "2");
    let day: usize = day_arg.parse()?;
    let &(_, solve) = days.iter().find(|&&(d, _)| d == day)
                          .unwrap_or_else(|| panic!("no solution for day {}", day));
    let input = std::fs::read_to_string(dbg!(fname))?;
    let time = std::time::Instant::now();
    println!("{}", solve(part_arg.parse()?, &input));
    println!("{} seconds elapsed", time.elapsed().as_secs_f32());
    Ok(())
}
