use clap::Parser;
use color_print::cprintln;
use mxasm::{files, Assembly};

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
  {about}

{usage-heading}
{tab}{usage}

{all-args}{after-help}";

#[derive(Debug, clap::Parser)]
#[clap(name = "mxasm", version, about = "Two-pass assembler for the MX12 machine", help_template = HELP_TEMPLATE)]
struct Args {
    /// Source files, base names without the .as extension
    #[clap()]
    input: Vec<String>,

    /// Print the symbol table and memory images after assembly
    #[clap(short, long)]
    dump: bool,
}

fn main() {
    let args = Args::parse();

    if args.input.is_empty() {
        cprintln!("<red,bold>Error</>: assembly files should be provided");
        std::process::exit(1);
    }

    println!("MX12 Assembler");
    for name in &args.input {
        println!();
        println!("{}", "-".repeat(80));
        println!("File: {}", files::with_extension(name, files::EXT_SOURCE));
        println!();
        process_file(name, args.dump);
    }
    println!();
    println!("{}", "-".repeat(80));
}

fn process_file(name: &str, dump: bool) {
    if name.len() > files::MAX_FILE_NAME_LENGTH {
        cprintln!("<red,bold>Error</>: the file name is too long");
        return;
    }
    let source = match files::read(name, files::EXT_SOURCE) {
        Ok(source) => source,
        Err(_) => {
            cprintln!("<red,bold>Error</>: the file was not found");
            return;
        }
    };

    let assembly = mxasm::assemble_text(&source);

    // The intermediate file is written even when later passes complain; it
    // is the easiest place to inspect what the macros expanded to.
    if let Err(e) = files::write(name, files::EXT_MACRO, &assembly.expanded) {
        cprintln!("<red,bold>Error</>: {}", e);
    }
    if assembly.macro_errors == 0 {
        println!(
            "Pre-assembly completed, {} macros found.",
            assembly.macros_found
        );
    }

    assembly.msgs.flush();
    println!();

    match &assembly.output {
        Some(_) => {
            if let Err(e) = write_outputs(name, &assembly) {
                cprintln!("<red,bold>Error</>: {}", e);
                return;
            }
            println!(
                "Compilation completed successfully, {} lines parsed",
                assembly.words()
            );
            if dump {
                print_dump(&assembly);
            }
        }
        None => {
            println!(
                "Number of errors: {}; compilation not completed",
                assembly.errors()
            );
        }
    }
}

fn write_outputs(name: &str, assembly: &Assembly) -> Result<(), mxasm::Error> {
    let Some(output) = &assembly.output else {
        return Ok(());
    };
    if let Some(entries) = &output.entries {
        files::write(name, files::EXT_ENTRY, entries)?;
    }
    if let Some(externals) = &output.externals {
        files::write(name, files::EXT_EXTERN, externals)?;
    }
    files::write(name, files::EXT_OBJECT, &output.object)?;
    Ok(())
}

fn print_dump(assembly: &Assembly) {
    println!();
    println!("Symbols:");
    for (name, label) in assembly.labels.iter() {
        cprintln!(
            "  <green>{:<31}</> {:>4}  {:?}",
            name,
            label.address,
            label.kind
        );
    }
    println!("Memory:");
    print!("{}", mxasm::output::render_listing(&assembly.code, &assembly.data));
}
