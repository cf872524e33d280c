use clap::{Args, Parser, Subcommand};
use secrecy::SecretString;
use trainhub_shared::{req_args::LoginReqArgs, uac::Role};

#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    #[arg(
        short = 's',
        long = "stdout",
        action,
        global = true,
        help = "Controls if it logs to stdout/stderr instead of to a file"
    )]
    pub is_to_std_out: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the dashboard for each role and who may open it
    Routes,
    /// Log in and show the dashboard for the account's role
    Dashboard {
        #[command(flatten)]
        login: LoginArgs,
        /// Only show rows containing this text (ignores case)
        #[arg(long)]
        search: Option<String>,
        /// Activate a column header. Repeat to cycle ascending, descending,
        /// unsorted
        #[arg(long = "sort", value_name = "KEY")]
        sort: Vec<String>,
        /// Only list accounts with this role (admin dashboard)
        #[arg(long)]
        role: Option<Role>,
    },
    /// Log in and ask the talent assistant for candidates (needs the
    /// manage_hiring permission)
    Ask {
        #[command(flatten)]
        login: LoginArgs,
        query: String,
    },
}

#[derive(Args, Debug, Clone)]
pub struct LoginArgs {
    #[arg(short, long)]
    pub email: String,
    #[arg(short, long)]
    pub password: String,
    #[arg(long, action)]
    pub remember_me: bool,
}

impl From<LoginArgs> for LoginReqArgs {
    fn from(value: LoginArgs) -> Self {
        LoginReqArgs::new(value.email, SecretString::from(value.password))
            .remember_me(value.remember_me)
    }
}
