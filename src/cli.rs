use clap::Parser;

use crate::utils::version;

#[derive(Parser, Debug)]
#[command(author, version = version(), about)]
pub struct Cli {
  #[arg(short, long, value_name = "URL", help = "Base URL of the account directory service")]
  pub directory: String,

  #[arg(short, long, value_name = "PATH", default_value = "/customers", help = "Initial console route")]
  pub route: String,
}
