use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

/// Write a synthetic evaluation export for trying the viewer.
#[derive(Debug, Parser)]
#[command(name = "generate_sample")]
struct Args {
    /// Output CSV path
    #[arg(default_value = "data.csv")]
    out: PathBuf,

    /// Number of evaluations to write
    #[arg(long, default_value_t = 40)]
    rows: usize,

    /// PRNG seed
    #[arg(long, default_value_t = 42)]
    seed: u64,
}

const HEADER: [&str; 12] = [
    "Timestamp",
    "Email Address",
    "Panelist Name",
    "Student Name",
    "Communication Skills",
    "Body Language & Confidence",
    "Domain Knowledge",
    "Analytical Thinking",
    "Leadership Potential",
    "Cultural Fit",
    "Overall Interview Performance",
    "Qualitative Feedback",
];

const FIRST_NAMES: [&str; 12] = [
    "Anaya", "Susan", "Alex", "Rohan", "Mei", "Daniel", "Priya", "Tomás", "Grace", "Omar",
    "Ishaan", "Lena",
];
const LAST_NAMES: [&str; 8] = [
    "Kim", "Patel", "Okafor", "Nguyen", "Fischer", "Haddad", "Silva", "Iyer",
];
const PANELISTS: [(&str, &str); 4] = [
    ("Jane Morris", "jane.morris@example.org"),
    ("Ravi Menon", "ravi.menon@example.org"),
    ("Claire Dubois", "claire.dubois@example.org"),
    ("Kwame Boateng", "kwame.boateng@example.org"),
];
const RATING_WORDS: [&str; 5] = ["Poor", "Below Average", "Average", "Good", "Excellent"];

const STRENGTHS: [&str; 6] = [
    "structured answers",
    "clear articulation of past projects",
    "strong grasp of fundamentals",
    "thoughtful questions for the panel",
    "calm under follow-up questions",
    "good examples of teamwork",
];
const GROWTH: [&str; 6] = [
    "should slow down when explaining",
    "needs more depth on system design",
    "could quantify impact more",
    "eye contact dropped on harder questions",
    "answers ran long",
    "should prepare more on the company domain",
];

/// SplitMix64: enough randomness for picking names and jittering ratings.
struct SimpleRng(u64);

impl SimpleRng {
    fn next_u64(&mut self) -> u64 {
        self.0 = self.0.wrapping_add(0x9e37_79b9_7f4a_7c15);
        let mut z = self.0;
        z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
        z ^ (z >> 31)
    }

    fn below(&mut self, n: usize) -> usize {
        (self.next_u64() % n as u64) as usize
    }

    fn pick<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        &items[self.below(items.len())]
    }
}

/// A rating around `base`, kept inside 1..=5.
fn rating(rng: &mut SimpleRng, base: i64) -> u8 {
    let jitter = rng.below(3) as i64 - 1;
    (base + jitter).clamp(1, 5) as u8
}

/// Mix bare digits with the form's "4 - Good" style answers.
fn rating_cell(rng: &mut SimpleRng, value: u8) -> String {
    if rng.below(3) == 0 {
        value.to_string()
    } else {
        format!("{value} - {}", RATING_WORDS[usize::from(value) - 1])
    }
}

fn overall_verdict(average: f64) -> &'static str {
    match average {
        a if a >= 4.5 => "Outstanding, strongly recommended",
        a if a >= 3.5 => "Good performance, recommended",
        a if a >= 2.5 => "Satisfactory, needs some preparation",
        _ => "Not ready yet, needs significant improvement",
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    let mut rng = SimpleRng(args.seed);

    let mut writer = csv::Writer::from_path(&args.out)
        .with_context(|| format!("creating {}", args.out.display()))?;
    writer.write_record(HEADER).context("writing header")?;

    for i in 0..args.rows {
        let (panelist, email) = *rng.pick(&PANELISTS);
        let student = format!("{} {}", rng.pick(&FIRST_NAMES), rng.pick(&LAST_NAMES));
        let base = 1 + rng.below(5) as i64;
        let ratings: Vec<u8> = (0..6).map(|_| rating(&mut rng, base)).collect();
        let average = ratings.iter().map(|&r| f64::from(r)).sum::<f64>() / 6.0;

        let timestamp = format!(
            "2025-03-{:02} {:02}:{:02}:00",
            1 + i % 28,
            9 + rng.below(8),
            rng.below(60)
        );
        let feedback = format!(
            "Showed {}, but {}.",
            rng.pick(&STRENGTHS),
            rng.pick(&GROWTH)
        );

        let mut row = vec![timestamp, email.to_string(), panelist.to_string(), student];
        row.extend(ratings.iter().map(|&r| rating_cell(&mut rng, r)));
        row.push(overall_verdict(average).to_string());
        row.push(feedback);

        writer
            .write_record(&row)
            .with_context(|| format!("writing row {i}"))?;
    }

    writer.flush().context("flushing CSV")?;
    println!("Wrote {} evaluations to {}", args.rows, args.out.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_sequence() {
        let mut a = SimpleRng(7);
        let mut b = SimpleRng(7);
        let xs: Vec<u64> = (0..8).map(|_| a.next_u64()).collect();
        let ys: Vec<u64> = (0..8).map(|_| b.next_u64()).collect();
        assert_eq!(xs, ys);
        assert_ne!(xs[0], xs[1]);
    }

    #[test]
    fn ratings_stay_on_scale() {
        let mut rng = SimpleRng(42);
        for base in 1..=5 {
            for _ in 0..50 {
                let r = rating(&mut rng, base);
                assert!((1..=5).contains(&r));
                assert!(rating_cell(&mut rng, r).starts_with(&r.to_string()));
            }
        }
    }
}
