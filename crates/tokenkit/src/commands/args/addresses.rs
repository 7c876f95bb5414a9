use clap::Parser;
use tokenkit_types::ContractKind;

use crate::messages::MSG_CONTRACT_KIND_HELP;

#[derive(Debug, Parser)]
pub struct AddressesArgs {
    #[clap(long, value_enum, default_value_t, help = MSG_CONTRACT_KIND_HELP)]
    pub kind: ContractKind,
}
