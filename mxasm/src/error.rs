use thiserror::Error;

/// Everything the assembler can complain about. Each diagnostic carries its
/// source line number separately (see `msg::Msgs`).
#[derive(Error, Debug)]
pub enum Error {
    #[error("A label cannot be declared more than once: `{0}`")]
    LabelAlreadyExists(String),

    #[error("A macro cannot be declared more than once: `{0}`")]
    MacroAlreadyExists(String),

    #[error("A comma is required between values")]
    CommaRequiredBetweenValues,

    #[error("The data directive accepts only numbers: `{0}`")]
    DataNeedNumValue(String),

    #[error("It is not possible to define a label before an entry directive")]
    CantDefineLabelBeforeEntry,

    #[error("It is not possible to define a label before an extern directive")]
    CantDefineLabelBeforeExtern,

    #[error("String should start with quotes")]
    StringStructureNotValid,

    #[error("String should end with quotes")]
    StringMustEndInQuotes,

    #[error("The string directive takes one argument")]
    StringDirectiveAcceptsOneParameter,

    #[error("Too many words for instruction")]
    TooMuchWordsForInstruction,

    #[error("The entry label was not found: `{0}`")]
    CantFindLabelToEntry(String),

    #[error("An external label cannot be declared as entry: `{0}`")]
    EntryCantBeExtern(String),

    #[error("The label name is invalid: `{0}`")]
    InvalidLabelName(String),

    #[error("Instruction does not exist: `{0}`")]
    InstructionNameNotExist(String),

    #[error("The instruction should receive two operands")]
    InstructionShouldReceiveTwoOperands,

    #[error("A comma is required between two operands")]
    CommaRequiredBetweenOperands,

    #[error("The instruction should receive one operand")]
    InstructionShouldReceiveOneOperand,

    #[error("The instruction should not accept operands")]
    InstructionShouldNotReceiveOperands,

    #[error("The instruction cannot receive this operand")]
    InvalidAddressMethodForInstruction,

    #[error("Must provide labels to extern directive")]
    MustProvideLabelsToExtern,

    #[error("Must provide labels to entry directive")]
    MustProvideLabelsToEntry,

    #[error("Must provide values to data directive")]
    MustProvideValuesToData,

    #[error("Invalid comma position")]
    InvalidCommaPosition,

    #[error("The label was not found: `{0}`")]
    LabelNotFound(String),

    #[error("You cannot define a nested macro")]
    NestedMacroDefinition,

    #[error("The macro name is a reserved instruction or directive: `{0}`")]
    MacroNameIsReserved(String),

    #[error("Failed to read file: {0}")]
    FileRead(String, #[source] std::io::Error),

    #[error("Failed to write file: {0}")]
    FileWrite(String, #[source] std::io::Error),
}
