//! Password and passphrase command handlers

use std::process::ExitCode;

use console::style;

use crate::cli::args::{PassphraseArgs, PasswordGenerateArgs};
use crate::error::Result;
use crate::output;
use crate::password::{self, wordlist, PassphraseOptions, PasswordOptions, Strength};

pub fn run_generate(args: PasswordGenerateArgs) -> Result<ExitCode> {
    let options = PasswordOptions {
        length: args.length,
        uppercase: !args.no_uppercase,
        lowercase: !args.no_lowercase,
        digits: !args.no_digits,
        symbols: !args.no_symbols,
        exclude: args.exclude.clone(),
    };
    let pool = password::charset(&options)?;
    let bits = password::entropy_bits(options.length, pool.len());
    let strength = Strength::from_bits(bits);

    let mut rows = Vec::with_capacity(args.count);
    for index in 1..=args.count {
        let generated = password::generate(&options)?;
        rows.push(vec![
            index.to_string(),
            generated,
            strength.label().to_string(),
        ]);
    }

    output::print_header("Generated Passwords");
    output::print_table(&["#", "Password", "Strength"], &rows);
    println!(
        "    {}",
        style(format!(
            "Entropy: ~{} bits ({} character pool)",
            bits.round() as u64,
            pool.len()
        ))
        .dim()
    );
    Ok(ExitCode::SUCCESS)
}

pub fn run_passphrase(args: PassphraseArgs) -> Result<ExitCode> {
    let options = PassphraseOptions {
        words: args.words,
        separator: args.separator.clone(),
        capitalize: args.capitalize,
    };

    let mut rows = Vec::with_capacity(args.count);
    for index in 1..=args.count {
        rows.push(vec![index.to_string(), password::passphrase(&options)]);
    }

    let bits = password::passphrase_entropy_bits(args.words);
    output::print_header("Generated Passphrases");
    output::print_table(&["#", "Passphrase"], &rows);
    println!(
        "    {}",
        style(format!(
            "Entropy: ~{} bits ({} word pool)",
            bits.round() as u64,
            wordlist::WORDS.len()
        ))
        .dim()
    );
    Ok(ExitCode::SUCCESS)
}
