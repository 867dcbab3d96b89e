use clap::Parser;
use flashcard_gen::{cli, client, config, error, logging, scanner, session};
use cli::{Cli, Commands};
use config::Config;
use error::Result;
use std::path::PathBuf;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    let config = Config::load()?;

    match cli.command {
        Commands::Process { inputs, prompt_file, output, emit, server, recursive, interactive } => {
            eprintln!("🃏 flashcard-gen - フラッシュカード生成\n");

            let server_url = server.unwrap_or_else(|| config.server_url());
            let client = client::ProcessingClient::new(&server_url)?;
            let mut session = session::Session::new(client);

            // 1. ファイル選択
            eprintln!("[1/3] ファイルを選択中...");
            let candidates = scanner::collect_inputs(&inputs, recursive)?;
            session.add_files(candidates);
            if interactive {
                session.review_interactively()?;
            }
            let count = session.controller().selection().len();
            if count == 0 {
                return Err(error::FlashcardError::NoFilesSelected);
            }
            eprintln!("✔ {}件のファイルを選択\n", count);

            if let Some(path) = prompt_file {
                let prompt = std::fs::read_to_string(&path)?;
                session.set_prompt(prompt);
            }
            if session.controller().prompt().is_customized() {
                eprintln!("- カスタムプロンプトを使用");
            }

            // 2. 送信
            eprintln!("[2/3] AI処理中... ({})", server_url);
            session.submit().await?;
            eprintln!();

            // 3. 出力
            eprintln!("[3/3] 結果を出力中...");
            if emit.writes_file() {
                let path = output.unwrap_or_else(|| PathBuf::from(&config.output_file));
                session.save_results(&path)?;
            }
            if emit.prints() {
                session.print_results()?;
            }

            eprintln!("\n✅ 完了");
        }

        Commands::Prompt { output } => {
            match output {
                Some(path) => {
                    std::fs::write(&path, flashcard_common::DEFAULT_PROMPT)?;
                    println!("✔ 既定プロンプトを保存: {}", path.display());
                }
                None => print!("{}", flashcard_common::DEFAULT_PROMPT),
            }
        }

        Commands::Config { set_server_url, show } => {
            let mut config = config;

            if let Some(url) = set_server_url {
                config.set_server_url(url)?;
                println!("✔ サーバーURLを設定しました");
            }

            if show {
                println!("設定:");
                println!("  サーバーURL: {}", config.server_url());
                println!("  出力ファイル: {}", config.output_file);
                if let Ok(path) = Config::config_path() {
                    println!("  設定ファイル: {}", path.display());
                }
            }
        }
    }

    Ok(())
}
