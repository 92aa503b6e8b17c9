use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

fn gaussian(x: f64, mu: f64, sigma: f64, amplitude: f64) -> f64 {
    amplitude * (-(x - mu).powi(2) / (2.0 * sigma.powi(2))).exp()
}

/// Word counts for a `bins`-word codebook drawn from a few peaked clusters.
fn generate_counts(bins: usize, peaks: &[(f64, f64, f64)], rng: &mut SimpleRng) -> Vec<u32> {
    (0..bins)
        .map(|bin| {
            let signal: f64 = peaks
                .iter()
                .map(|&(mu, sigma, amp)| gaussian(bin as f64, mu, sigma, amp))
                .sum();
            (signal + rng.gauss(0.0, 1.5)).round().max(0.0) as u32
        })
        .collect()
}

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

/// Write one histogram file: image comment, format line, then one row per
/// series as `bins, f0, f1, ...`.
fn write_histogram(path: &Path, image: &str, bins: usize, rows: &[Vec<u32>]) -> Result<()> {
    let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    let mut out = BufWriter::new(file);
    writeln!(out, "# {image}")?;
    writeln!(out, "# Format: number of bins followed by bin frequencies")?;
    for row in rows {
        let cells: Vec<String> = std::iter::once(bins.to_string())
            .chain(row.iter().map(u32::to_string))
            .collect();
        writeln!(out, "{}", cells.join(", "))?;
    }
    out.flush()?;
    Ok(())
}

fn main() -> Result<()> {
    let out_dir = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."));
    std::fs::create_dir_all(&out_dir)
        .with_context(|| format!("creating {}", out_dir.display()))?;

    let mut rng = SimpleRng::new(42);

    let samples: [(&str, usize, Vec<(f64, f64, f64)>); 4] = [
        ("forest", 50, vec![(8.0, 3.0, 30.0), (31.0, 5.0, 18.0)]),
        ("harbour", 50, vec![(15.0, 4.0, 25.0), (40.0, 2.0, 35.0)]),
        ("street", 80, vec![(10.0, 6.0, 20.0), (45.0, 8.0, 22.0), (70.0, 3.0, 15.0)]),
        ("desert", 30, vec![(5.0, 2.0, 40.0)]),
    ];

    let mut written = 0;
    for (name, bins, peaks) in &samples {
        let path = out_dir.join(format!("{name}.csv"));
        let counts = generate_counts(*bins, peaks, &mut rng);
        write_histogram(&path, &format!("images/{name}.png"), *bins, &[counts])?;
        println!("Wrote {} ({bins} bins)", path.display());
        written += 1;
    }

    // Two images of the same scene in one file, drawn as grouped bars.
    let (name, bins, peaks) = &samples[0];
    let rows: Vec<Vec<u32>> = (0..2)
        .map(|_| generate_counts(*bins, peaks, &mut rng))
        .collect();
    let path = out_dir.join(format!("{name}_pair.csv"));
    write_histogram(&path, &format!("images/{name}_pair.png"), *bins, &rows)?;
    println!("Wrote {} ({bins} bins, {} rows)", path.display(), rows.len());
    written += 1;

    println!("{written} histogram files in {}", out_dir.display());
    Ok(())
}
