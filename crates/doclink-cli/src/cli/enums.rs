use clap::ValueEnum;
use doclink_core::MustBe;

/// Kind filter for a reference
#[derive(Copy, Clone, PartialEq, Eq, Debug, ValueEnum)]
pub enum MustBeArg {
    /// Classes, enums, interfaces, type aliases and namespaces
    #[value(name = "type")]
    Type,

    /// Classes only
    #[value(name = "class")]
    Class,
}

impl From<MustBeArg> for MustBe {
    fn from(arg: MustBeArg) -> Self {
        match arg {
            MustBeArg::Type => MustBe::Type,
            MustBeArg::Class => MustBe::Class,
        }
    }
}
