use std::io;
use std::path;

use anyhow::bail;
use anyhow::Result;
use clap::value_parser;
use clap::Arg;
use clap::ArgAction;
use clap::ArgMatches;
use clap::Command;
use clap_complete::generate;
use clap_complete::Generator;
use clap_complete::Shell;
use dialoguer::theme::ColorfulTheme;
use dialoguer::Password;
use tokio::fs;
use tokio::io::AsyncWriteExt;

use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::split_csv;
use crate::domain::models::BlogPayload;
use crate::domain::models::BlogPost;
use crate::domain::models::Credentials;
use crate::domain::models::EducationEntry;
use crate::domain::models::EducationPayload;
use crate::domain::models::GatewayBox;
use crate::domain::models::Project;
use crate::domain::models::ProjectPayload;
use crate::domain::services::AccessGate;
use crate::domain::services::SessionStore;
use crate::infrastructure::gateway;

fn print_completions<G: Generator>(gen: G, cmd: &mut Command) {
    generate(gen, cmd, cmd.get_name().to_string(), &mut io::stdout());
    std::process::exit(0);
}

fn format_project(project: &Project) -> String {
    let mut res = format!("- (ID: {}) {}", project.id, project.title);

    if !project.technologies.is_empty() {
        res = format!("{res}, Tech: {}", project.technologies.join(", "));
    }
    if !project.live_url.is_empty() {
        res = format!("{res}, Live: {}", project.live_url);
    }

    return res;
}

fn format_blog(post: &BlogPost) -> String {
    let mut res = format!("- (ID: {}) {}, By: {}", post.id, post.title, post.author);

    if !post.category.is_empty() {
        res = format!("{res}, Category: {}", post.category);
    }

    return res;
}

fn format_education(entry: &EducationEntry) -> String {
    let end = entry
        .end_date
        .clone()
        .unwrap_or_else(|| return "present".to_string());

    return format!(
        "- (ID: {}) {}, {} ({} - {end})",
        entry.id, entry.degree, entry.institution, entry.start_date
    );
}

fn flag(matches: &ArgMatches, id: &str) -> String {
    return matches
        .get_one::<String>(id)
        .cloned()
        .unwrap_or_default();
}

async fn create_config_file() -> Result<()> {
    let config_file_path_str = Config::default(ConfigKey::ConfigFile);
    let config_file_path = path::PathBuf::from(&config_file_path_str);
    if config_file_path.exists() {
        bail!(format!(
            "Config file already exists at {config_file_path_str}"
        ));
    }

    if !config_file_path.parent().unwrap().exists() {
        fs::create_dir_all(config_file_path.parent().unwrap()).await?;
    }

    let mut file = fs::File::create(config_file_path.clone()).await?;
    file.write_all(Config::serialize_default(build()).as_bytes())
        .await?;

    let config_path_display = config_file_path.as_os_str().to_str().unwrap();
    println!("Created default config file at {config_path_display}");
    return Ok(());
}

async fn command_login(matches: &ArgMatches) -> Result<()> {
    let email = matches.get_one::<String>("email").unwrap().to_string();
    let password = match matches.get_one::<String>("password") {
        Some(password) => password.to_string(),
        None => Password::with_theme(&ColorfulTheme::default())
            .with_prompt("Password")
            .interact()?,
    };

    let api = gateway::connect();
    let res = api.login(Credentials { email, password }).await?;

    let session = SessionStore::default();
    session.login(&res.token, &res.user.role)?;

    println!(
        "Logged in as {name} ({role}).",
        name = res.user.name,
        role = res.user.role
    );
    return Ok(());
}

fn command_logout() -> Result<()> {
    SessionStore::default().logout()?;
    println!("Logged out.");
    return Ok(());
}

fn command_whoami() -> Result<()> {
    let session = SessionStore::default();
    if !session.is_authenticated() {
        println!("Not logged in.");
        return Ok(());
    }

    let role = session
        .role()
        .unwrap_or_else(|| return "unknown".to_string());
    let admin = if session.is_admin() {
        ", admin access"
    } else {
        ""
    };
    println!("Logged in. Role: {role}{admin}.");
    return Ok(());
}

async fn command_projects(api: &GatewayBox, matches: &ArgMatches) -> Result<()> {
    match matches.subcommand() {
        Some(("list", _)) => {
            let projects = api.list_projects().await?;
            if projects.is_empty() {
                println!("There are no projects yet.");
                return Ok(());
            }

            let lines = projects
                .iter()
                .map(|project| {
                    return format_project(project);
                })
                .collect::<Vec<String>>();
            println!("{}", lines.join("\n"));
        }
        Some(("get", sub)) => {
            let id = sub.get_one::<String>("id").unwrap();
            let project = api.get_project(id).await?;
            println!("{}", serde_json::to_string_pretty(&project)?);
        }
        Some(("add", sub)) => {
            AccessGate::require_login(&SessionStore::default())?;

            let payload = ProjectPayload::from_form(
                sub.get_one::<String>("title").unwrap(),
                sub.get_one::<String>("description").unwrap(),
                sub.get_one::<String>("technologies").unwrap(),
                &flag(sub, "live-url"),
                &flag(sub, "repo-urls"),
                &flag(sub, "image-urls"),
                &flag(sub, "features"),
            );

            let project = api.create_project(payload).await?;
            println!("Project {id} added.", id = project.id);
        }
        Some(("update", sub)) => {
            AccessGate::require_login(&SessionStore::default())?;

            let id = sub.get_one::<String>("id").unwrap();
            let mut payload = api.get_project(id).await?.to_payload();

            if let Some(title) = sub.get_one::<String>("title") {
                payload.title = title.to_string();
            }
            if let Some(description) = sub.get_one::<String>("description") {
                payload.description = description.to_string();
            }
            if let Some(technologies) = sub.get_one::<String>("technologies") {
                payload.technologies = split_csv(technologies);
            }
            if let Some(live_url) = sub.get_one::<String>("live-url") {
                payload.live_url = live_url.to_string();
            }
            if let Some(repo_urls) = sub.get_one::<String>("repo-urls") {
                payload.github_links = split_csv(repo_urls);
            }
            if let Some(image_urls) = sub.get_one::<String>("image-urls") {
                payload.image_urls = split_csv(image_urls);
            }
            if let Some(features) = sub.get_one::<String>("features") {
                payload.features = split_csv(features);
            }

            api.update_project(id, payload).await?;
            println!("Project {id} updated.");
        }
        Some(("delete", sub)) => {
            AccessGate::require_login(&SessionStore::default())?;

            let id = sub.get_one::<String>("id").unwrap();
            api.delete_project(id).await?;
            println!("Project {id} deleted.");
        }
        _ => {
            subcommand_projects().print_long_help()?;
        }
    }

    return Ok(());
}

async fn command_blogs(api: &GatewayBox, matches: &ArgMatches) -> Result<()> {
    match matches.subcommand() {
        Some(("list", _)) => {
            let posts = api.list_blogs().await?;
            if posts.is_empty() {
                println!("There are no blog posts yet.");
                return Ok(());
            }

            let lines = posts
                .iter()
                .map(|post| {
                    return format_blog(post);
                })
                .collect::<Vec<String>>();
            println!("{}", lines.join("\n"));
        }
        Some(("get", sub)) => {
            let id = sub.get_one::<String>("id").unwrap();
            let post = api.get_blog(id).await?;
            println!("{}", serde_json::to_string_pretty(&post)?);
        }
        Some(("add", sub)) => {
            AccessGate::require_login(&SessionStore::default())?;

            let author = match sub.get_one::<String>("author") {
                Some(author) => author.to_string(),
                None => Config::get(ConfigKey::Username),
            };

            let payload = BlogPayload::from_form(
                sub.get_one::<String>("title").unwrap(),
                sub.get_one::<String>("content").unwrap(),
                &author,
                &flag(sub, "category"),
                &flag(sub, "tags"),
                &flag(sub, "image-url"),
            );

            let post = api.create_blog(payload).await?;
            println!("Blog post {id} added.", id = post.id);
        }
        Some(("update", sub)) => {
            AccessGate::require_login(&SessionStore::default())?;

            let id = sub.get_one::<String>("id").unwrap();
            let mut payload = api.get_blog(id).await?.to_payload();

            if let Some(title) = sub.get_one::<String>("title") {
                payload.title = title.to_string();
            }
            if let Some(content) = sub.get_one::<String>("content") {
                payload.content = content.to_string();
            }
            if let Some(author) = sub.get_one::<String>("author") {
                payload.author = author.to_string();
            }
            if let Some(category) = sub.get_one::<String>("category") {
                payload.category = category.to_string();
            }
            if let Some(tags) = sub.get_one::<String>("tags") {
                payload.tags = split_csv(tags);
            }
            if let Some(image_url) = sub.get_one::<String>("image-url") {
                payload.image_url = image_url.to_string();
            }

            api.update_blog(id, payload).await?;
            println!("Blog post {id} updated.");
        }
        Some(("delete", sub)) => {
            AccessGate::require_login(&SessionStore::default())?;

            let id = sub.get_one::<String>("id").unwrap();
            api.delete_blog(id).await?;
            println!("Blog post {id} deleted.");
        }
        _ => {
            subcommand_blogs().print_long_help()?;
        }
    }

    return Ok(());
}

async fn command_education(api: &GatewayBox, matches: &ArgMatches) -> Result<()> {
    match matches.subcommand() {
        Some(("list", _)) => {
            let entries = api.list_education().await?;
            if entries.is_empty() {
                println!("There are no education entries yet.");
                return Ok(());
            }

            let lines = entries
                .iter()
                .map(|entry| {
                    return format_education(entry);
                })
                .collect::<Vec<String>>();
            println!("{}", lines.join("\n"));
        }
        Some(("get", sub)) => {
            let id = sub.get_one::<String>("id").unwrap();
            let entry = api.get_education(id).await?;
            println!("{}", serde_json::to_string_pretty(&entry)?);
        }
        Some(("add", sub)) => {
            AccessGate::require_login(&SessionStore::default())?;

            let payload = EducationPayload::from_form(
                sub.get_one::<String>("degree").unwrap(),
                sub.get_one::<String>("institution").unwrap(),
                sub.get_one::<String>("field-of-study").unwrap(),
                sub.get_one::<String>("start-date").unwrap(),
                &flag(sub, "end-date"),
                &flag(sub, "honors"),
                &flag(sub, "certifications"),
                &flag(sub, "institute-picture"),
            );

            let entry = api.create_education(payload).await?;
            println!("Education entry {id} added.", id = entry.id);
        }
        Some(("update", sub)) => {
            AccessGate::require_login(&SessionStore::default())?;

            let id = sub.get_one::<String>("id").unwrap();
            let mut payload = api.get_education(id).await?.to_payload();

            if let Some(degree) = sub.get_one::<String>("degree") {
                payload.degree = degree.to_string();
            }
            if let Some(institution) = sub.get_one::<String>("institution") {
                payload.institution = institution.to_string();
            }
            if let Some(field_of_study) = sub.get_one::<String>("field-of-study") {
                payload.field_of_study = field_of_study.to_string();
            }
            if let Some(start_date) = sub.get_one::<String>("start-date") {
                payload.start_date = start_date.to_string();
            }
            if let Some(end_date) = sub.get_one::<String>("end-date") {
                payload.end_date = Some(end_date.to_string());
            }
            if let Some(honors) = sub.get_one::<String>("honors") {
                payload.honors = Some(honors.to_string());
            }
            if let Some(certifications) = sub.get_one::<String>("certifications") {
                let certs = split_csv(certifications);
                payload.certifications = if certs.is_empty() { None } else { Some(certs) };
            }
            if let Some(institute_picture) = sub.get_one::<String>("institute-picture") {
                payload.institue_picture = institute_picture.to_string();
            }

            api.update_education(id, payload).await?;
            println!("Education entry {id} updated.");
        }
        Some(("delete", sub)) => {
            AccessGate::require_login(&SessionStore::default())?;

            let id = sub.get_one::<String>("id").unwrap();
            api.delete_education(id).await?;
            println!("Education entry {id} deleted.");
        }
        _ => {
            subcommand_education().print_long_help()?;
        }
    }

    return Ok(());
}

fn arg_id() -> Arg {
    return Arg::new("id")
        .help("Resource ID as assigned by the backend.")
        .required(true);
}

fn subcommand_completions() -> Command {
    return Command::new("completions")
        .about("Generates shell completions.")
        .arg(
            clap::Arg::new("shell")
                .short('s')
                .long("shell")
                .help("Which shell to generate completions for.")
                .action(ArgAction::Set)
                .value_parser(value_parser!(Shell))
                .required(true),
        );
}

fn subcommand_config() -> Command {
    return Command::new("config")
        .about("Configuration file options.")
        .subcommand(
            Command::new("create").about("Saves the default config file to the configuration file path. This command will fail if the file exists already.")
        )
        .subcommand(
            Command::new("default").about("Outputs the default configuration file to stdout.")
        )
        .subcommand(
            Command::new("path").about("Returns the default path for the configuration file.")
        );
}

fn subcommand_login() -> Command {
    return Command::new("login")
        .about("Log in to the backend and store the issued session.")
        .arg(
            Arg::new("email")
                .short('e')
                .long("email")
                .help("Account email address.")
                .required(true),
        )
        .arg(
            Arg::new("password")
                .short('p')
                .long("password")
                .env("FOLIO_PASSWORD")
                .help("Account password. Prompted interactively when omitted."),
        );
}

fn subcommand_projects() -> Command {
    return Command::new("projects")
        .about("Browse and manage portfolio projects.")
        .arg_required_else_help(true)
        .subcommand(Command::new("list").about("List all projects."))
        .subcommand(
            Command::new("get")
                .about("Fetch a single project by ID.")
                .arg(arg_id()),
        )
        .subcommand(
            Command::new("add")
                .about("Create a new project. Requires login.")
                .arg(Arg::new("title").long("title").help("Project title.").required(true))
                .arg(Arg::new("description").long("description").help("Project description.").required(true))
                .arg(Arg::new("technologies").long("technologies").help("Technologies, comma separated.").required(true))
                .arg(Arg::new("live-url").long("live-url").help("Live deployment URL."))
                .arg(Arg::new("repo-urls").long("repo-urls").help("Repository URLs, comma separated."))
                .arg(Arg::new("image-urls").long("image-urls").help("Image URLs, comma separated."))
                .arg(Arg::new("features").long("features").help("Features, comma separated.")),
        )
        .subcommand(
            Command::new("update")
                .about("Update a project. Unset flags keep their stored values. Requires login.")
                .arg(arg_id())
                .arg(Arg::new("title").long("title").help("Project title."))
                .arg(Arg::new("description").long("description").help("Project description."))
                .arg(Arg::new("technologies").long("technologies").help("Technologies, comma separated."))
                .arg(Arg::new("live-url").long("live-url").help("Live deployment URL."))
                .arg(Arg::new("repo-urls").long("repo-urls").help("Repository URLs, comma separated."))
                .arg(Arg::new("image-urls").long("image-urls").help("Image URLs, comma separated."))
                .arg(Arg::new("features").long("features").help("Features, comma separated.")),
        )
        .subcommand(
            Command::new("delete")
                .about("Delete a project by ID. Requires login.")
                .arg(arg_id()),
        );
}

fn subcommand_blogs() -> Command {
    return Command::new("blogs")
        .about("Browse and manage blog posts.")
        .arg_required_else_help(true)
        .subcommand(Command::new("list").about("List all blog posts."))
        .subcommand(
            Command::new("get")
                .about("Fetch a single blog post by ID.")
                .arg(arg_id()),
        )
        .subcommand(
            Command::new("add")
                .about("Create a new blog post. Requires login.")
                .arg(Arg::new("title").long("title").help("Post title.").required(true))
                .arg(Arg::new("content").long("content").help("Post body.").required(true))
                .arg(Arg::new("author").long("author").help("Author name. Defaults to the configured username."))
                .arg(Arg::new("category").long("category").help("Post category."))
                .arg(Arg::new("tags").long("tags").help("Tags, comma separated."))
                .arg(Arg::new("image-url").long("image-url").help("Cover image URL.")),
        )
        .subcommand(
            Command::new("update")
                .about("Update a blog post. Unset flags keep their stored values. Requires login.")
                .arg(arg_id())
                .arg(Arg::new("title").long("title").help("Post title."))
                .arg(Arg::new("content").long("content").help("Post body."))
                .arg(Arg::new("author").long("author").help("Author name."))
                .arg(Arg::new("category").long("category").help("Post category."))
                .arg(Arg::new("tags").long("tags").help("Tags, comma separated."))
                .arg(Arg::new("image-url").long("image-url").help("Cover image URL.")),
        )
        .subcommand(
            Command::new("delete")
                .about("Delete a blog post by ID. Requires login.")
                .arg(arg_id()),
        );
}

fn subcommand_education() -> Command {
    return Command::new("education")
        .about("Browse and manage education entries.")
        .arg_required_else_help(true)
        .subcommand(Command::new("list").about("List all education entries."))
        .subcommand(
            Command::new("get")
                .about("Fetch a single education entry by ID.")
                .arg(arg_id()),
        )
        .subcommand(
            Command::new("add")
                .about("Create a new education entry. Requires login.")
                .arg(Arg::new("degree").long("degree").help("Degree name.").required(true))
                .arg(Arg::new("institution").long("institution").help("Institution name.").required(true))
                .arg(Arg::new("field-of-study").long("field-of-study").help("Field of study.").required(true))
                .arg(Arg::new("start-date").long("start-date").help("Start date.").required(true))
                .arg(Arg::new("end-date").long("end-date").help("End date. Omit for ongoing studies."))
                .arg(Arg::new("honors").long("honors").help("Honors, if any."))
                .arg(Arg::new("certifications").long("certifications").help("Certifications, comma separated."))
                .arg(Arg::new("institute-picture").long("institute-picture").help("Institution picture URL.")),
        )
        .subcommand(
            Command::new("update")
                .about("Update an education entry. Unset flags keep their stored values. Requires login.")
                .arg(arg_id())
                .arg(Arg::new("degree").long("degree").help("Degree name."))
                .arg(Arg::new("institution").long("institution").help("Institution name."))
                .arg(Arg::new("field-of-study").long("field-of-study").help("Field of study."))
                .arg(Arg::new("start-date").long("start-date").help("Start date."))
                .arg(Arg::new("end-date").long("end-date").help("End date."))
                .arg(Arg::new("honors").long("honors").help("Honors, if any."))
                .arg(Arg::new("certifications").long("certifications").help("Certifications, comma separated."))
                .arg(Arg::new("institute-picture").long("institute-picture").help("Institution picture URL.")),
        )
        .subcommand(
            Command::new("delete")
                .about("Delete an education entry by ID. Requires login.")
                .arg(arg_id()),
        );
}

pub fn build() -> Command {
    let about = format!(
        "{}\n\nVersion: {}",
        env!("CARGO_PKG_DESCRIPTION"),
        env!("CARGO_PKG_VERSION")
    );

    return Command::new("folio")
        .about(about)
        .author(env!("CARGO_PKG_AUTHORS"))
        .version(env!("CARGO_PKG_VERSION"))
        .arg_required_else_help(false)
        .subcommand(subcommand_completions())
        .subcommand(subcommand_config())
        .subcommand(subcommand_login())
        .subcommand(Command::new("logout").about("Clear the stored session."))
        .subcommand(Command::new("whoami").about("Show the stored session state."))
        .subcommand(subcommand_projects())
        .subcommand(subcommand_blogs())
        .subcommand(subcommand_education())
        .arg(
            Arg::new(ConfigKey::ConfigFile.to_string())
                .short('c')
                .long(ConfigKey::ConfigFile.to_string())
                .env("FOLIO_CONFIG_FILE")
                .num_args(1)
                .help(format!(
                    "Path to configuration file [default: {}]",
                    Config::default(ConfigKey::ConfigFile)
                ))
                .global(true),
        )
        .arg(
            Arg::new(ConfigKey::ApiURL.to_string())
                .long(ConfigKey::ApiURL.to_string())
                .env("FOLIO_API_URL")
                .num_args(1)
                .help(format!(
                    "Portfolio backend API base URL. [default: {}]",
                    Config::default(ConfigKey::ApiURL)
                ))
                .global(true),
        )
        .arg(
            Arg::new(ConfigKey::SessionFile.to_string())
                .long(ConfigKey::SessionFile.to_string())
                .env("FOLIO_SESSION_FILE")
                .num_args(1)
                .help(format!(
                    "Path to the file holding the current login session. [default: {}]",
                    Config::default(ConfigKey::SessionFile)
                ))
                .global(true),
        )
        .arg(
            Arg::new(ConfigKey::Username.to_string())
                .short('u')
                .long(ConfigKey::Username.to_string())
                .env("FOLIO_USERNAME")
                .num_args(1)
                .help("Default author name used when adding blog posts.")
                .global(true),
        );
}

pub async fn parse() -> Result<()> {
    let matches = build().get_matches();

    match matches.subcommand() {
        Some(("completions", subcmd_matches)) => {
            if let Some(completions) = subcmd_matches.get_one::<Shell>("shell").copied() {
                let mut app = build();
                print_completions(completions, &mut app);
            }
        }
        Some(("config", subcmd_matches)) => match subcmd_matches.subcommand() {
            Some(("create", _)) => {
                create_config_file().await?;
            }
            Some(("default", _)) => {
                println!("{}", Config::serialize_default(build()));
            }
            Some(("path", _)) => {
                println!("{}", Config::default(ConfigKey::ConfigFile));
            }
            _ => {
                subcommand_config().print_long_help()?;
            }
        },
        Some(("login", subcmd_matches)) => {
            Config::load(build(), vec![&matches, subcmd_matches]).await?;
            command_login(subcmd_matches).await?;
        }
        Some(("logout", subcmd_matches)) => {
            Config::load(build(), vec![&matches, subcmd_matches]).await?;
            command_logout()?;
        }
        Some(("whoami", subcmd_matches)) => {
            Config::load(build(), vec![&matches, subcmd_matches]).await?;
            command_whoami()?;
        }
        Some(("projects", subcmd_matches)) => {
            Config::load(build(), vec![&matches, subcmd_matches]).await?;
            let api = gateway::connect();
            command_projects(&api, subcmd_matches).await?;
        }
        Some(("blogs", subcmd_matches)) => {
            Config::load(build(), vec![&matches, subcmd_matches]).await?;
            let api = gateway::connect();
            command_blogs(&api, subcmd_matches).await?;
        }
        Some(("education", subcmd_matches)) => {
            Config::load(build(), vec![&matches, subcmd_matches]).await?;
            let api = gateway::connect();
            command_education(&api, subcmd_matches).await?;
        }
        _ => {
            build().print_long_help()?;
        }
    }

    return Ok(());
}
