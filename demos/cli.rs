use dummyapi_rs::{Client, DetailResolver, Selection};
use structopt::StructOpt;

#[derive(Debug, StructOpt)]
enum Opt {
    /// List one page of users.
    List {
        #[structopt(long, short, default_value = "0")]
        page: u64,
    },
    /// Show the full record of a user, by id or path (/id).
    Show { selector: String },
    /// Scroll through the feed for a number of pages.
    Scroll {
        #[structopt(long, short, default_value = "3")]
        pages: u64,
    },
    /// Create a user.
    Create {
        first_name: String,
        last_name: String,
        email: String,
    },
    /// Delete a user.
    Delete { id: String },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let opt = Opt::from_args();
    let client = Client::new()?;

    match opt {
        Opt::List { page } => {
            let res = client
                .users
                .list(dummyapi_rs::users::ListOptions::page(page))
                .await?;
            for user in res.data {
                println!("{}  {} {}", user.id, user.first_name, user.last_name);
            }
        }
        Opt::Show { selector } => {
            let selection = if selector.starts_with('/') {
                Selection::from_path(selector)
            } else {
                Selection::from_click(selector)
            };
            let mut resolver = DetailResolver::new();
            resolver.resolve(&client.users, &selection).await;
            if let Some(e) = resolver.error() {
                eprintln!("fetch failed: {}", e);
            }
            if let Some(user) = resolver.detail() {
                println!("{} {}", user.first_name, user.last_name);
                println!("Email: {}", user.email);
                println!("Gender: {}", user.gender);
                println!("Date of birth: {}", user.date_of_birth.date_naive());
                println!("Phone: {}", user.phone);
            }
        }
        Opt::Scroll { pages } => {
            let mut feed = client.feed();
            feed.start().await?;
            for _ in 1..pages {
                feed.load_more().await?;
            }
            for user in feed.users() {
                println!("{}  {} {}", user.id, user.first_name, user.last_name);
            }
        }
        Opt::Create {
            first_name,
            last_name,
            email,
        } => {
            let req = dummyapi_rs::users::CreateUserRequest::new(first_name, last_name, email);
            let user = client.users.create(req).await?;
            println!("created {}", user.id);
        }
        Opt::Delete { id } => client.users.delete(&id).await?,
    }

    Ok(())
}
