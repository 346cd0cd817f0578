use mxasm::{assemble_text, Assembly};

fn assemble(source: &str) -> Assembly {
    assemble_text(source)
}

fn object_of(assembly: &Assembly) -> &str {
    assembly
        .output
        .as_ref()
        .map(|out| out.object.as_str())
        .unwrap_or("")
}

#[test]
fn empty_file() {
    let assembly = assemble("");
    assert_eq!(assembly.errors(), 0);
    let output = assembly.output.as_ref().unwrap();
    assert_eq!(output.object, "0\t0\n");
    assert!(output.entries.is_none());
    assert!(output.externals.is_none());
}

#[test]
fn minimal_program() {
    let assembly = assemble("stop\n");
    assert_eq!(assembly.errors(), 0);
    assert_eq!(assembly.ic(), 101);
    assert_eq!(assembly.dc(), 0);
    // stop packs its opcode into bits 5..=8: word 480, base-64 "Hg".
    assert_eq!(object_of(&assembly), "1\t0\nHg\n");
}

#[test]
fn data_with_label() {
    let assembly = assemble("X: .data 5, -6, 15\n");
    assert_eq!(assembly.errors(), 0);
    assert_eq!(assembly.dc(), 3);
    let x = assembly.labels.get("X").unwrap();
    assert_eq!(x.address, 100);
    assert_eq!(object_of(&assembly), "0\t3\nAF\n/6\nAP\n");
}

#[test]
fn two_operand_with_external() {
    let assembly = assemble(".extern LBL\nmov LBL, @r2\n");
    assert_eq!(assembly.errors(), 0);
    assert_eq!(assembly.ic(), 103);
    let output = assembly.output.as_ref().unwrap();
    assert_eq!(output.externals.as_deref(), Some("LBL\t101\n"));
    assert!(output.entries.is_none());
    // First word 1556, external operand word 1, register word 8.
    assert_eq!(output.object, "3\t0\nYU\nAB\nAI\n");
}

#[test]
fn macro_expansion() {
    let assembly = assemble("mcro M\ninc @r1\nendmcro\nM\nM\n");
    assert_eq!(assembly.errors(), 0);
    assert_eq!(assembly.expanded, "inc @r1\ninc @r1\n");
    assert_eq!(assembly.macros_found, 1);
    // Two one-operand inc encodings with a register destination.
    assert_eq!(object_of(&assembly), "4\t0\nD0\nAE\nD0\nAE\n");
}

#[test]
fn duplicate_label_blocks_output() {
    let assembly = assemble("A: .data 1\nA: .data 2\n");
    assert_eq!(assembly.errors(), 1);
    assert!(assembly.output.is_none());
}

#[test]
fn entries_file() {
    let assembly = assemble("MAIN: inc @r1\nEND: stop\n.entry MAIN, END\n");
    assert_eq!(assembly.errors(), 0);
    assert!(assembly.has_entry);
    let output = assembly.output.as_ref().unwrap();
    assert_eq!(output.entries.as_deref(), Some("MAIN\t100\nEND\t102\n"));
    assert!(output.externals.is_none());
}

#[test]
fn extern_without_use_site_emits_no_externals_file() {
    let assembly = assemble(".extern E\nstop\n");
    assert_eq!(assembly.errors(), 0);
    assert!(assembly.has_extern);
    let output = assembly.output.as_ref().unwrap();
    assert!(output.externals.is_none());
}

#[test]
fn data_labels_land_behind_the_code() {
    let assembly = assemble("mov @r1, @r2\nX: .data 7\nY: .string \"hi\"\n");
    assert_eq!(assembly.errors(), 0);
    assert_eq!(assembly.ic(), 102);
    assert_eq!(assembly.labels.get("X").unwrap().address, 102);
    assert_eq!(assembly.labels.get("Y").unwrap().address, 103);
}

#[test]
fn external_words_carry_the_external_encoding() {
    let assembly = assemble(".extern E\njmp E\njsr E\n");
    assert_eq!(assembly.errors(), 0);
    for (_, address) in &assembly.externals {
        let word = assembly.code[(*address - 100) as usize];
        assert_eq!(word.encoding(), 1);
        assert_eq!(word.operand_address(), 0);
    }
    let output = assembly.output.as_ref().unwrap();
    assert_eq!(output.externals.as_deref(), Some("E\t101\nE\t103\n"));
}

#[test]
fn macro_errors_do_not_stop_the_first_pass_but_block_output() {
    let assembly = assemble("mcro mov\ninc @r1\nendmcro\nstop\n");
    assert_eq!(assembly.macro_errors, 1);
    assert_eq!(assembly.errors(), 1);
    // The first pass still ran over the expanded text.
    assert_eq!(assembly.ic(), 101);
    assert!(assembly.output.is_none());
}

#[test]
fn first_pass_errors_stop_the_second_pass() {
    // The unknown mnemonic is a first-pass diagnostic; the dangling label
    // reference would only be found by the second pass, which must not run.
    let assembly = assemble("badop\njmp NOWHERE\n");
    assert_eq!(assembly.errors(), 1);
    assert!(assembly.output.is_none());
}

#[test]
fn second_pass_errors_block_output() {
    let assembly = assemble("jmp NOWHERE\n");
    assert_eq!(assembly.errors(), 1);
    assert!(assembly.output.is_none());
}

#[test]
fn assembly_is_deterministic() {
    let source = ".extern E\nMAIN: mov @r1, @r2\nloop: cmp 5, MAIN\nbne loop\njsr E\n.entry MAIN\nX: .data -1, 2\n";
    let first = assemble(source);
    let second = assemble(source);
    assert_eq!(first.errors(), 0);
    let a = first.output.as_ref().unwrap();
    let b = second.output.as_ref().unwrap();
    assert_eq!(a.object, b.object);
    assert_eq!(a.entries, b.entries);
    assert_eq!(a.externals, b.externals);
}

#[test]
fn expansion_of_macro_free_source_is_the_source() {
    let source = "mov @r1, @r2\n; comment\n\nstop\n";
    let assembly = assemble(source);
    assert_eq!(assembly.expanded, source);
}

#[test]
fn capacity_boundary() {
    let values: Vec<String> = (0..arch::MAX_WORDS).map(|i| (i % 100).to_string()).collect();
    let source = format!(".data {}\n", values.join(", "));
    let assembly = assemble(&source);
    assert_eq!(assembly.errors(), 0);
    assert_eq!(assembly.dc() as usize, arch::MAX_WORDS);
    let object = object_of(&assembly);
    assert!(object.starts_with("0\t924\n"));
    assert_eq!(object.lines().count(), 925);
}

#[test]
fn immediate_bounds() {
    let assembly = assemble("prn -512\nprn 511\n");
    assert_eq!(assembly.errors(), 0);
    // -512 and 511 fill the ten-bit operand field from both ends.
    assert_eq!(assembly.code[1].get(), 512 << 2);
    assert_eq!(assembly.code[3].get(), 511 << 2);
}
