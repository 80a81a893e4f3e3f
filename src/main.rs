use dotenv::dotenv;
use issue_filer::issue_filer_main;
use std::process::exit;

#[tokio::main]
async fn main() {
    dotenv().ok();
    match issue_filer_main().await {
        Ok(_) => {
            exit(0);
        }
        Err(e) => {
            eprintln!("{e}");
            exit(1);
        }
    };
}
