const USAGE: &str = "\
Usage: maclog [--version | --help]

Serves the CPF / MAC log API and dashboard. Settings come from the
environment (a .env file in the working directory is read first):

  HOST                   listen host             (0.0.0.0)
  PORT                   listen port             (3000)
  DB_HOST                PostgreSQL host         (localhost)
  DB_PORT                PostgreSQL port         (5432)
  DB_USER                PostgreSQL user         (loguser)
  DB_PASSWORD            PostgreSQL password     (logpassword123)
  DB_NAME                database name           (logdb)
  DB_POOL_MAX            pool size               (20)
  DB_IDLE_TIMEOUT_MS     idle connection timeout (30000)
  DB_CONNECT_TIMEOUT_MS  acquire timeout         (2000)
  DB_INIT_SCHEMA         create table at startup (true)
  RUST_LOG               log filter              (info,tower_http=debug)";

#[tokio::main]
async fn main() {
  match std::env::args().nth(1).as_deref() {
    None => {}
    Some("--version" | "-V") => {
      println!("maclog {}", env!("CARGO_PKG_VERSION"));
      return;
    }
    Some("--help" | "-h") => {
      println!("{USAGE}");
      return;
    }
    Some(other) => {
      eprintln!("unknown argument: {other}\n\n{USAGE}");
      std::process::exit(2);
    }
  }

  if let Err(e) = maclog::app::run().await {
    eprintln!("error: {e}");
    std::process::exit(1);
  }
}
