// Earth -> Mars weight converter.
//
//   Enter a weight on earth: 120
//   The equivalent weight on Mars: 45.36
//
// One line in, one line out. A non-numeric input propagates out of main
// and terminates the process without printing a result line.

use std::error::Error;
use std::io::{self, Write};

/// Mars surface gravity as a fraction of Earth's.
const MARS_MULTIPLE: f64 = 0.378;

fn mars_weight(earth_weight: f64) -> f64 {
    earth_weight * MARS_MULTIPLE
}

fn main() -> Result<(), Box<dyn Error>> {
    print!("Enter a weight on earth: ");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    let earth_weight: f64 = line.trim().parse()?;

    println!("The equivalent weight on Mars: {}", mars_weight(earth_weight));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_by_the_fixed_multiplier() {
        assert!((mars_weight(120.0) - 45.36).abs() < 1e-9);
        assert!((mars_weight(0.0)).abs() < 1e-9);
        assert!((mars_weight(1.0) - 0.378).abs() < 1e-9);
    }

    #[test]
    fn non_numeric_input_fails_to_parse() {
        assert!("not a number".trim().parse::<f64>().is_err());
        assert!("".trim().parse::<f64>().is_err());
    }
}
