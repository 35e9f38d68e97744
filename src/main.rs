use std::env;
use std::process;

// Use the library crate's modules
use fpfixed::fpu::{FpFormat, Fpu, RoundingMode};

struct Options {
    operand: u64,
    format: FpFormat,
    ibits: usize,
    fbits: usize,
    unsigned: bool,
    rounding: Option<RoundingMode>,
    fpcr: u32,
}

fn parse_hex(s: &str) -> Result<u64, String> {
    let digits = s.trim_start_matches("0x").trim_start_matches("0X");
    u64::from_str_radix(digits, 16).map_err(|e| format!("Invalid hex value '{}': {}", s, e))
}

fn parse_args(args: &[String]) -> Result<Options, String> {
    let mut operand = None;
    let mut format = FpFormat::Single;
    let mut ibits = 32;
    let mut fbits = 0;
    let mut unsigned = false;
    let mut rounding = None;
    let mut fpcr = 0u32;

    let mut i = 1;
    while i < args.len() {
        let value_of = |i: usize| args.get(i + 1).ok_or_else(|| format!("Missing value for {}", args[i]));
        match args[i].as_str() {
            "--format" => {
                let v = value_of(i)?;
                format = FpFormat::from_mnemonic(v).ok_or_else(|| format!("Unknown format: {}", v))?;
                i += 1;
            }
            "--ibits" => {
                let v = value_of(i)?;
                ibits = v.parse().map_err(|_| format!("Invalid --ibits: {}", v))?;
                i += 1;
            }
            "--fbits" => {
                let v = value_of(i)?;
                fbits = v.parse().map_err(|_| format!("Invalid --fbits: {}", v))?;
                i += 1;
            }
            "--rmode" => {
                let v = value_of(i)?;
                rounding = Some(RoundingMode::from_mnemonic(v).ok_or_else(|| format!("Unknown rounding mode: {}", v))?);
                i += 1;
            }
            "--fpcr" => {
                fpcr = parse_hex(value_of(i)?)? as u32;
                i += 1;
            }
            "--unsigned" => {
                unsigned = true;
            }
            arg if !arg.starts_with("-") => {
                operand = Some(parse_hex(arg)?);
            }
            _ => {
                return Err(format!("Unknown argument: {}", args[i]));
            }
        }
        i += 1;
    }

    let operand = operand.ok_or_else(|| "Missing operand".to_string())?;
    Ok(Options { operand, format, ibits, fbits, unsigned, rounding, fpcr })
}

fn flag_names(fpu: &Fpu) -> Vec<&'static str> {
    let mut names = Vec::new();
    if fpu.fpsr.ioc { names.push("IOC"); }
    if fpu.fpsr.ixc { names.push("IXC"); }
    if fpu.fpsr.idc { names.push("IDC"); }
    names
}

fn main() {
    let args: Vec<String> = env::args().collect();

    let opts = match parse_args(&args) {
        Ok(opts) => opts,
        Err(e) => {
            eprintln!("ERROR: {}", e);
            eprintln!("Usage: {} <operand-hex> [--format h|s|d] [--ibits <n>] [--fbits <n>] [--unsigned] [--rmode rne|rp|rm|rz|rna] [--fpcr <hex>]", args[0]);
            process::exit(1);
        }
    };

    let mut fpu = Fpu::new(opts.fpcr);
    let rounding = opts.rounding.unwrap_or_else(|| fpu.fpcr.rmode());

    let result = match fpu.convert_bits(opts.operand, opts.format, opts.ibits, opts.fbits, opts.unsigned, rounding) {
        Ok(result) => result,
        Err(e) => {
            eprintln!("ERROR: {}", e);
            process::exit(1);
        }
    };

    // Sign-extend for display when the destination is signed
    let decimal = if opts.unsigned {
        result.to_string()
    } else {
        let shift = 64 - opts.ibits as u32;
        (((result << shift) as i64) >> shift).to_string()
    };

    println!("{:#x} ({})", result, decimal);
    let flags = flag_names(&fpu);
    println!("FPSR={:#010x} [{}]", fpu.read_fpsr(), flags.join(" "));
}
