use anyhow::{Context, Result};
use csv::WriterBuilder;

use sunspot_dash::data::loader::FIELD_COUNT;
use sunspot_dash::Marker;

const FIRST_YEAR: i32 = 1749;
const LAST_YEAR: i32 = 2023;
/// Start of the first synthetic cycle.
const CYCLE_EPOCH: f64 = 1755.2;
const CYCLE_YEARS: f64 = 11.0;
/// Before this year the real record has no spread or observation counts.
const FIRST_OBSERVED_YEAR: i32 = 1818;
const PROVISIONAL_MONTHS: usize = 6;

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }
}

/// Smooth cycle shape with a slowly drifting peak height.
fn cycle_signal(t: f64) -> f64 {
    let phase = (t - CYCLE_EPOCH) / CYCLE_YEARS;
    let cycle_index = phase.floor();
    let peak = 140.0 + 70.0 * (2.0 * std::f64::consts::PI * cycle_index / 9.0).sin();
    peak * (std::f64::consts::PI * phase.fract()).sin().powi(2)
}

fn main() -> Result<()> {
    let mut rng = SimpleRng::new(11);

    let months: Vec<(i32, u8)> = (FIRST_YEAR..=LAST_YEAR)
        .flat_map(|y| (1..=12u8).map(move |m| (y, m)))
        .collect();
    let provisional_from = months.len().saturating_sub(PROVISIONAL_MONTHS);

    let output_path = "sample_sunspot.csv";
    let mut writer = WriterBuilder::new()
        .delimiter(b';')
        .has_headers(false)
        .from_path(output_path)
        .with_context(|| format!("creating {output_path}"))?;

    for (i, &(year, month)) in months.iter().enumerate() {
        let t = year as f64 + (month as f64 - 0.5) / 12.0;
        let signal = cycle_signal(t);
        let total = rng.gauss(signal, 0.15 * signal + 4.0).max(0.0);

        let (std_dev, observations) = if year < FIRST_OBSERVED_YEAR {
            (-1.0, -1)
        } else {
            (0.08 * total + 1.5, 20 + (rng.next_u64() % 1200) as i32)
        };
        let marker = if i >= provisional_from {
            Marker::Provisional
        } else {
            Marker::Definitive
        };

        let row: [String; FIELD_COUNT] = [
            year.to_string(),
            format!("{month:02}"),
            format!("{t:.3}"),
            format!("{total:6.1}"),
            format!("{std_dev:5.1}"),
            format!("{observations:5}"),
            marker.as_field().to_string(),
        ];
        writer
            .write_record(&row)
            .with_context(|| format!("writing {year}-{month:02}"))?;
    }
    writer.flush().context("flushing output")?;

    println!(
        "Wrote {} monthly records ({FIRST_YEAR}–{LAST_YEAR}) to {output_path}",
        months.len()
    );
    Ok(())
}
