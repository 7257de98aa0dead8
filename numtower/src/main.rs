use clap::Parser as ClapParser;
use std::{
    io::{self, Write},
    process,
};

use numtower::{
    Number, Value,
    primitives::{Arity, default_primitives, primitive_index_by_name},
};

#[derive(ClapParser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Primitive to run, see --list
    #[arg(required_unless_present = "list")]
    op: Option<String>,

    /// Operands: integers, ratios (3/4), decimals (1.25), complex (2-3i) or nan
    #[arg(allow_hyphen_values = true)]
    operands: Vec<String>,

    /// Reseed the shared generator first
    #[arg(long, allow_hyphen_values = true)]
    seed: Option<String>,

    /// Bits kept by inexact results
    #[arg(long)]
    precision: Option<u32>,

    /// Print the binary encoding of the result as hex
    #[arg(long, help = "Print the encoded result instead of rendering it")]
    encode: bool,

    /// List the available primitives
    #[arg(long)]
    list: bool,
}

fn parse_operand(text: &str) -> Value {
    match text {
        "nan" => Value::Nan,
        "true" => Value::Boolean(true),
        "false" => Value::Boolean(false),
        _ => match text.parse::<Number>() {
            Ok(number) => Value::Number(number),
            Err(_) => Value::from(text),
        },
    }
}

fn describe(arity: Arity) -> String {
    match arity {
        Arity::Exactly(n) => n.to_string(),
        Arity::Between(min, max) => format!("{min}..{max}"),
        Arity::AtLeast(min) => format!("{min}+"),
    }
}

fn hex(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{b:02x}")).collect()
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();
    let prims = default_primitives();

    let mut stdout = io::stdout().lock();
    if cli.list {
        for prim in &prims {
            if let Err(err) = writeln!(stdout, "{:<20} {}", prim.name, describe(prim.arity)) {
                eprintln!("Error writing output: {}", err);
                process::exit(1);
            }
        }
        return;
    }

    if let Some(bits) = cli.precision {
        numtower::set_precision(bits);
    }
    if let Some(seed) = &cli.seed {
        let applied = seed
            .parse::<Number>()
            .ok()
            .is_some_and(|seed| numtower::set_seed(&seed).is_ok());
        if !applied {
            eprintln!("Invalid seed '{}': expected an integer", seed);
            process::exit(1);
        }
    }

    let Some(op) = cli.op.as_deref() else {
        return;
    };
    let Some(index) = primitive_index_by_name(&prims, op) else {
        eprintln!("Unknown primitive '{}', try --list", op);
        process::exit(1);
    };

    let args: Vec<Value> = cli.operands.iter().map(|s| parse_operand(s)).collect();
    let result = prims[index].call(&args);

    let written = if cli.encode {
        match result.as_number() {
            Some(number) => writeln!(stdout, "{}", hex(&numtower::to_bytes(number))),
            None => {
                eprintln!("Cannot encode {}", result.type_name());
                process::exit(1);
            }
        }
    } else {
        writeln!(stdout, "{result}")
    };
    if let Err(err) = written {
        eprintln!("Error writing output: {}", err);
        process::exit(1);
    }
}
