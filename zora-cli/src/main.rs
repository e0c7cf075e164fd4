use anyhow::anyhow;
use clap::{arg, Command};
use zora_lib::{
    config,
    core::{locale::Locale, lookup::Panel},
};

use crate::lookup::run_lookup;

pub mod lookup;

fn cli() -> Command {
    Command::new("zora")
        .about("Zora CLI - Look up a wallet's Zora token allocation")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("lookup")
                .about("Looks up the total tokens earned by a wallet address")
                .arg(arg!(<ADDRESS> "Wallet address (0x followed by 40 hex digits)"))
                .arg(
                    arg!(--"proxy-url" <URL> "Proxy endpoint, defaults to ZORA_PROXY_URL")
                        .required(false),
                )
                .arg(arg!(--locale <LOCALE> "Message language: tr or en").required(false))
                .arg_required_else_help(true),
        )
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    config::init();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("warn"));

    let matches = cli().get_matches();

    match matches.subcommand() {
        Some(("lookup", sub_matches)) => {
            let address = sub_matches
                .get_one::<String>("ADDRESS")
                .expect("required");
            let proxy_url = sub_matches
                .get_one::<String>("proxy-url")
                .cloned()
                .unwrap_or_else(config::proxy_url);
            let locale = match sub_matches.get_one::<String>("locale") {
                Some(raw) => raw.parse::<Locale>()?,
                None => config::default_locale(),
            };

            let view = run_lookup(&proxy_url, address, locale).await?;
            match view.panel {
                Panel::Result(amount) => {
                    println!("{} {}", locale.messages().result_heading, amount);
                    Ok(())
                }
                Panel::Error(message) => Err(anyhow!(message)),
                Panel::None => Err(anyhow!(locale.messages().unexpected_error)),
            }
        }
        _ => {
            println!("No subcommand was used");
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_definition_is_valid() {
        cli().debug_assert();
    }

    #[test]
    fn lookup_takes_address_and_optional_flags() {
        let matches = cli()
            .try_get_matches_from([
                "zora",
                "lookup",
                "0x000000000000000000000000000000000000dEaD",
                "--proxy-url",
                "http://127.0.0.1:3000/api/zora",
            ])
            .unwrap();
        let (name, sub_matches) = matches.subcommand().unwrap();

        assert_eq!(name, "lookup");
        assert_eq!(
            sub_matches.get_one::<String>("proxy-url").map(String::as_str),
            Some("http://127.0.0.1:3000/api/zora")
        );
        assert!(sub_matches.get_one::<String>("locale").is_none());
    }
}
