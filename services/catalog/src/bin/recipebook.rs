//! Command-line front end for the recipe book. Every invocation behaves like
//! one page load against the profile store: bootstrap first, then one action.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};

use recipebook_catalog::config::CatalogConfig;
use recipebook_catalog::domain::form::{ImageUpload, LineItems, RecipeForm};
use recipebook_catalog::domain::types::CatalogEntry;
use recipebook_catalog::error::CatalogError;
use recipebook_catalog::infra::file::FileStore;
use recipebook_catalog::state::Catalog;
use recipebook_catalog::usecase::admin::{
    AdminDeleteRecipeUseCase, ClearDirectoryUseCase, DeleteUserUseCase, DumpDirectoryUseCase,
    ListCatalogUseCase, ListUsersUseCase, SetUserActiveUseCase, StatisticsUseCase,
};
use recipebook_catalog::usecase::favorite::{ListFavoritesUseCase, ToggleFavoriteUseCase};
use recipebook_catalog::usecase::recipe::{
    AddRecipeUseCase, DeleteRecipeUseCase, ExportRecipeUseCase, GetRecipeUseCase,
    ListRecipesUseCase, MyRecipesUseCase, OpenSelectedRecipeUseCase, RecipeDetail,
    SearchRecipesUseCase, SelectRecipeUseCase,
};
use recipebook_catalog::usecase::user::{
    BootstrapUseCase, CurrentSessionUseCase, LoginInput, LoginUseCase, LogoutUseCase,
    SignUpInput, SignUpUseCase,
};
use recipebook_core::tracing::init_cli_tracing;
use recipebook_domain::format::{format_category, format_cooking_time};
use recipebook_domain::id::{RecipeId, UserId};

type Profile = Catalog<FileStore>;

#[derive(Parser)]
#[command(name = "recipebook", version, about = "Browse, add and favorite recipes")]
struct Cli {
    /// Profile store file.
    #[arg(long, env = "RECIPEBOOK_STORE")]
    store: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Create an account and sign in.
    Signup {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        username: String,
        #[arg(long)]
        password: String,
        /// Defaults to the password.
        #[arg(long)]
        confirm_password: Option<String>,
    },
    /// Sign in with email or username.
    Login {
        identifier: String,
        #[arg(long)]
        password: String,
    },
    Logout,
    /// Show the signed-in account.
    Whoami,
    #[command(subcommand)]
    Recipes(RecipeCommand),
    #[command(subcommand)]
    Favorites(FavoriteCommand),
    #[command(subcommand)]
    Admin(AdminCommand),
}

#[derive(Subcommand)]
enum RecipeCommand {
    List,
    Search {
        query: String,
    },
    Show {
        id: String,
        /// Rescale ingredients to this many servings (1-20).
        #[arg(long)]
        servings: Option<u32>,
    },
    Add(AddArgs),
    Delete {
        id: String,
    },
    Export {
        id: String,
        /// Output file; defaults to a name derived from the title.
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Remember a recipe for the detail view.
    Select {
        id: String,
    },
    /// Open the remembered recipe.
    Open {
        #[arg(long)]
        servings: Option<u32>,
    },
    /// Recipes added by the signed-in account.
    Mine,
}

#[derive(Args)]
struct AddArgs {
    #[arg(long)]
    title: String,
    #[arg(long, default_value = "")]
    description: String,
    #[arg(long, default_value = "")]
    category: String,
    #[arg(long, default_value = "")]
    prep_time: String,
    #[arg(long, default_value = "")]
    cook_time: String,
    #[arg(long, default_value = "")]
    servings: String,
    #[arg(long, default_value = "")]
    notes: String,
    /// Repeat once per ingredient line.
    #[arg(long = "ingredient")]
    ingredients: Vec<String>,
    /// Repeat once per step.
    #[arg(long = "step")]
    steps: Vec<String>,
    /// Image file to attach.
    #[arg(long)]
    image: Option<PathBuf>,
}

#[derive(Subcommand)]
enum FavoriteCommand {
    Toggle { id: String },
    List,
}

#[derive(Subcommand)]
enum AdminCommand {
    Users,
    Activate { id: String },
    Deactivate { id: String },
    DeleteUser { id: String },
    Recipes,
    DeleteRecipe { id: String },
    Stats,
    /// Print the user directory and session as JSON.
    Dump,
    /// Remove every account and the session.
    Clear,
}

fn main() -> ExitCode {
    init_cli_tracing();
    let cli = Cli::parse();

    let config = CatalogConfig::from_env();
    let path = cli.store.clone().unwrap_or(config.store_path);
    let profile = Catalog::new(FileStore::open(path).with_quota(config.store_quota));

    match run(&profile, cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            match e.downcast_ref::<CatalogError>() {
                Some(catalog) => {
                    eprintln!("{}", catalog.user_message());
                    if catalog.redirects_to_catalog() {
                        eprintln!("Back to the catalog: `recipebook recipes list`.");
                    }
                }
                None => eprintln!("error: {e:#}"),
            }
            ExitCode::FAILURE
        }
    }
}

fn run(profile: &Profile, command: Command) -> anyhow::Result<()> {
    BootstrapUseCase {
        users: profile.users(),
    }
    .execute()?;

    match command {
        Command::Signup {
            name,
            email,
            username,
            password,
            confirm_password,
        } => {
            let confirm_password = confirm_password.unwrap_or_else(|| password.clone());
            let session = SignUpUseCase {
                users: profile.users(),
                sessions: profile.sessions(),
            }
            .execute(SignUpInput {
                name,
                email,
                username,
                password,
                confirm_password,
            })?;
            println!("Account created successfully! Welcome, {}", session.name);
        }
        Command::Login {
            identifier,
            password,
        } => {
            let session = LoginUseCase {
                users: profile.users(),
                sessions: profile.sessions(),
            }
            .execute(LoginInput {
                identifier,
                password,
            })?;
            println!("Login successful! Welcome back, {}", session.name);
        }
        Command::Logout => {
            let ended = LogoutUseCase {
                sessions: profile.sessions(),
            }
            .execute()?;
            println!("{}", if ended { "Logged out" } else { "Not logged in" });
        }
        Command::Whoami => {
            match (CurrentSessionUseCase {
                sessions: profile.sessions(),
            })
            .execute()?
            {
                Some(s) => println!("{} <{}> ({})", s.name, s.email, s.role.as_str()),
                None => println!("Not logged in"),
            }
        }
        Command::Recipes(command) => run_recipes(profile, command)?,
        Command::Favorites(command) => run_favorites(profile, command)?,
        Command::Admin(command) => run_admin(profile, command)?,
    }
    Ok(())
}

fn run_recipes(profile: &Profile, command: RecipeCommand) -> anyhow::Result<()> {
    match command {
        RecipeCommand::List => {
            let entries = ListRecipesUseCase {
                recipes: profile.recipes(),
            }
            .execute()?;
            print_entries(&entries);
        }
        RecipeCommand::Search { query } => {
            let entries = SearchRecipesUseCase {
                recipes: profile.recipes(),
            }
            .execute(&query)?;
            if entries.is_empty() {
                println!("No recipes found");
            }
            print_entries(&entries);
        }
        RecipeCommand::Show { id, servings } => {
            let detail = GetRecipeUseCase {
                recipes: profile.recipes(),
                favorites: profile.favorites(),
            }
            .execute(&RecipeId::from(id))?;
            print_detail(detail, servings);
        }
        RecipeCommand::Add(args) => {
            let recipe = AddRecipeUseCase {
                recipes: profile.recipes(),
                sessions: profile.sessions(),
            }
            .execute(&form_from_args(args)?)?;
            println!("Recipe saved: {} ({})", recipe.title, recipe.id);
        }
        RecipeCommand::Delete { id } => {
            let deleted = DeleteRecipeUseCase {
                recipes: profile.recipes(),
            }
            .execute(&RecipeId::from(id))?;
            println!(
                "{}",
                if deleted {
                    "Recipe deleted successfully"
                } else {
                    "Built-in recipes cannot be deleted"
                }
            );
        }
        RecipeCommand::Export { id, out } => {
            let exported = ExportRecipeUseCase {
                recipes: profile.recipes(),
            }
            .execute(&RecipeId::from(id))?;
            let path = out.unwrap_or_else(|| PathBuf::from(&exported.file_name));
            std::fs::write(&path, exported.contents)
                .with_context(|| format!("failed to write {}", path.display()))?;
            println!("Exported to {}", path.display());
        }
        RecipeCommand::Select { id } => {
            SelectRecipeUseCase {
                selection: profile.selection(),
            }
            .execute(&RecipeId::from(id))?;
        }
        RecipeCommand::Open { servings } => {
            let detail = OpenSelectedRecipeUseCase {
                recipes: profile.recipes(),
                favorites: profile.favorites(),
                selection: profile.selection(),
            }
            .execute()?;
            print_detail(detail, servings);
        }
        RecipeCommand::Mine => {
            let mine = MyRecipesUseCase {
                recipes: profile.recipes(),
                sessions: profile.sessions(),
            }
            .execute()?;
            if mine.is_empty() {
                println!("You haven't created any recipes yet. Use `recipes add` to get started!");
            } else {
                println!("You have {} recipe(s):", mine.len());
                for recipe in mine {
                    println!("{}\t{}", recipe.id, recipe.title);
                }
            }
        }
    }
    Ok(())
}

fn run_favorites(profile: &Profile, command: FavoriteCommand) -> anyhow::Result<()> {
    match command {
        FavoriteCommand::Toggle { id } => {
            let favorite = ToggleFavoriteUseCase {
                favorites: profile.favorites(),
            }
            .execute(&RecipeId::from(id))?;
            println!(
                "{}",
                if favorite {
                    "Added to favorites"
                } else {
                    "Removed from favorites"
                }
            );
        }
        FavoriteCommand::List => {
            let entries = ListFavoritesUseCase {
                favorites: profile.favorites(),
                recipes: profile.recipes(),
            }
            .execute()?;
            print_entries(&entries);
        }
    }
    Ok(())
}

fn run_admin(profile: &Profile, command: AdminCommand) -> anyhow::Result<()> {
    match command {
        AdminCommand::Users => {
            let users = ListUsersUseCase {
                users: profile.users(),
                sessions: profile.sessions(),
            }
            .execute()?;
            for user in users {
                println!(
                    "{}\t{}\t{}\t{}\t{}",
                    user.id,
                    user.name,
                    user.email,
                    user.role.as_str(),
                    if user.is_active { "active" } else { "inactive" }
                );
            }
        }
        AdminCommand::Activate { id } => set_active(profile, id, true)?,
        AdminCommand::Deactivate { id } => set_active(profile, id, false)?,
        AdminCommand::DeleteUser { id } => {
            DeleteUserUseCase {
                users: profile.users(),
                sessions: profile.sessions(),
            }
            .execute(&UserId::from(id.as_str()))?;
            println!("User {id} deleted");
        }
        AdminCommand::Recipes => {
            let entries = ListCatalogUseCase {
                recipes: profile.recipes(),
                sessions: profile.sessions(),
            }
            .execute()?;
            print_entries(&entries);
        }
        AdminCommand::DeleteRecipe { id } => {
            let deleted = AdminDeleteRecipeUseCase {
                recipes: profile.recipes(),
                sessions: profile.sessions(),
            }
            .execute(&RecipeId::from(id))?;
            println!(
                "{}",
                if deleted {
                    "Recipe deleted successfully"
                } else {
                    "Built-in recipes cannot be deleted"
                }
            );
        }
        AdminCommand::Stats => {
            let stats = StatisticsUseCase {
                users: profile.users(),
                recipes: profile.recipes(),
                sessions: profile.sessions(),
            }
            .execute()?;
            println!("{}", serde_json::to_string_pretty(&stats)?);
        }
        AdminCommand::Dump => {
            let dump = DumpDirectoryUseCase {
                users: profile.users(),
                sessions: profile.sessions(),
            }
            .execute()?;
            println!("{}", serde_json::to_string_pretty(&dump)?);
        }
        AdminCommand::Clear => {
            ClearDirectoryUseCase {
                users: profile.users(),
                sessions: profile.sessions(),
            }
            .execute()?;
            println!("User directory cleared");
        }
    }
    Ok(())
}

fn set_active(profile: &Profile, id: String, active: bool) -> anyhow::Result<()> {
    SetUserActiveUseCase {
        users: profile.users(),
        sessions: profile.sessions(),
    }
    .execute(&UserId::from(id.as_str()), active)?;
    println!(
        "User {id} {}",
        if active { "activated" } else { "deactivated" }
    );
    Ok(())
}

fn form_from_args(args: AddArgs) -> anyhow::Result<RecipeForm> {
    let image = match args.image {
        Some(path) => Some(read_image(&path)?.into_data_uri()?),
        None => None,
    };
    Ok(RecipeForm {
        title: args.title,
        description: args.description,
        category: args.category,
        prep_time: args.prep_time,
        cook_time: args.cook_time,
        servings: args.servings,
        notes: args.notes,
        ingredients: LineItems::from_lines(args.ingredients),
        steps: LineItems::from_lines(args.steps),
        image,
    })
}

fn read_image(path: &Path) -> anyhow::Result<ImageUpload> {
    let bytes = std::fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);
    let mime_type = match extension.as_deref() {
        Some("png") => "image/png",
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("svg") => "image/svg+xml",
        _ => "application/octet-stream",
    };
    Ok(ImageUpload {
        mime_type: mime_type.to_owned(),
        bytes,
    })
}

fn print_entries(entries: &[CatalogEntry]) {
    for entry in entries {
        let recipe = &entry.recipe;
        println!(
            "{}\t{}\t{}\t{}{}",
            recipe.id,
            recipe.title,
            format_category(&recipe.category),
            format_cooking_time(recipe.total_time_minutes()),
            if entry.is_mutable() { "" } else { "\t(sample)" }
        );
    }
}

fn print_detail(mut detail: RecipeDetail, servings: Option<u32>) {
    if let Some(servings) = servings {
        detail.servings.set_target(servings);
    }
    let recipe = detail.recipe();
    let star = if detail.is_favorite { " ★" } else { "" };
    println!("{}{star}", recipe.title);
    if !recipe.description.is_empty() {
        println!("{}", recipe.description);
    }
    println!(
        "{} · {} · {} · serves {}",
        format_category(&recipe.category),
        format_cooking_time(recipe.total_time_minutes()),
        recipe.difficulty.as_str(),
        detail.servings.target_servings()
    );
    println!("\nIngredients:");
    for line in detail.servings.scaled() {
        println!("  - {line}");
    }
    println!("\nInstructions:");
    for (index, step) in recipe.instructions.iter().enumerate() {
        println!("  {}. {step}", index + 1);
    }
    if !recipe.notes.is_empty() {
        println!("\nNotes:\n{}", recipe.notes);
    }
    let n = &recipe.nutrition;
    println!(
        "\nNutrition (per serving): {} kcal, protein {}, carbs {}, fat {}",
        n.calories, n.protein, n.carbs, n.fat
    );
}
