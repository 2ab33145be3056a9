//! # Order Prompt
//!
//! The input collaborator: asks three questions and builds a `CoffeeOrder`.
//!
//! ```text
//! Choose beverage (espresso/latte/cappuccino): Latte
//! Choose size (small/medium/large): medium
//! Extras (comma separated, blank for none): soy, oat
//!
//! → CoffeeOrder { beverage: "latte", size: "medium", extras: ["soy", "oat"] }
//! ```
//!
//! Answers are normalised here; whether they are on the menu is decided by
//! the pricing engine.

use std::io::{self, BufRead, Write};

use brew_core::CoffeeOrder;

/// Writes `question`, then reads one line. End of input reads as blank.
pub fn ask<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    question: &str,
) -> io::Result<String> {
    write!(output, "{question}")?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line)
}

/// Asks for beverage, size and extras, listing the menu's choices.
pub fn read_order<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    beverages: &[&str],
    sizes: &[&str],
) -> io::Result<CoffeeOrder> {
    let beverage = ask(input, output, &format!("Choose beverage ({}): ", beverages.join("/")))?;
    let size = ask(input, output, &format!("Choose size ({}): ", sizes.join("/")))?;
    let extras = ask(input, output, "Extras (comma separated, blank for none): ")?;

    Ok(CoffeeOrder::from_raw(&beverage, &size, &extras))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_read_order_normalises_answers() {
        let mut input = Cursor::new("  Latte\nMEDIUM\nSoy, , oat \n");
        let mut output = Vec::new();

        let order = read_order(
            &mut input,
            &mut output,
            &["espresso", "latte"],
            &["small", "medium"],
        )
        .unwrap();

        assert_eq!(
            order,
            CoffeeOrder::new("latte", "medium", vec!["soy".to_string(), "oat".to_string()])
        );
        assert_eq!(
            String::from_utf8(output).unwrap(),
            "Choose beverage (espresso/latte): \
             Choose size (small/medium): \
             Extras (comma separated, blank for none): "
        );
    }

    #[test]
    fn test_blank_and_missing_answers() {
        let mut input = Cursor::new("espresso\nlarge\n");
        let mut output = Vec::new();

        let order = read_order(&mut input, &mut output, &["espresso"], &["large"]).unwrap();
        assert_eq!(order, CoffeeOrder::new("espresso", "large", Vec::new()));
    }
}
