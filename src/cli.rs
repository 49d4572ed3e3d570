//! Command-line front end over the catalog services.

use std::collections::BTreeSet;

use clap::{Parser, Subcommand};
use serde_json::Value;

use crate::domain::types::{CategoryId, GenreId};
use crate::dto::categories::{
    CreateCategoryRequest, DeleteCategoryRequest, GetCategoryRequest, UpdateCategoryRequest,
};
use crate::dto::genres::{
    CreateGenreRequest, DeleteGenreRequest, GetGenreRequest, UpdateGenreRequest,
};
use crate::repository::{CategoryRepository, GenreRepository};
use crate::services::{categories, genres};

#[derive(Parser)]
#[command(name = "catalog")]
#[command(about = "Manage catalog categories and genres.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Manage categories
    #[command(subcommand)]
    Category(CategoryCommand),
    /// Manage genres
    #[command(subcommand)]
    Genre(GenreCommand),
}

#[derive(Subcommand)]
pub enum CategoryCommand {
    /// Create a category and print its id
    Create {
        #[arg(long)]
        name: String,
        #[arg(long, default_value = "")]
        description: String,
        /// Create the category deactivated
        #[arg(long)]
        inactive: bool,
    },
    /// Show one category
    Get { id: CategoryId },
    /// List all categories
    List,
    /// Change the given fields of a category
    Update {
        id: CategoryId,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        active: Option<bool>,
    },
    /// Delete a category
    Delete { id: CategoryId },
}

#[derive(Subcommand)]
pub enum GenreCommand {
    /// Create a genre and print its id
    Create {
        #[arg(long)]
        name: String,
        /// Category id to link; repeat for several
        #[arg(long = "category")]
        categories: Vec<CategoryId>,
        /// Create the genre deactivated
        #[arg(long)]
        inactive: bool,
    },
    /// Show one genre
    Get { id: GenreId },
    /// List all genres
    List,
    /// Change the given fields of a genre
    Update {
        id: GenreId,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        active: Option<bool>,
        /// Replace the linked categories; repeat for several
        #[arg(long = "category")]
        categories: Vec<CategoryId>,
        /// Unlink every category
        #[arg(long, conflicts_with = "categories")]
        clear_categories: bool,
    },
    /// Delete a genre
    Delete { id: GenreId },
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

/// Run `command` and return its JSON result, `Value::Null` when the
/// command produces no output.
pub fn execute<C, G>(
    command: Commands,
    category_repo: &C,
    genre_repo: &G,
) -> anyhow::Result<Value>
where
    C: CategoryRepository,
    G: GenreRepository,
{
    let output = match command {
        Commands::Category(command) => execute_category(command, category_repo)?,
        Commands::Genre(command) => execute_genre(command, genre_repo, category_repo)?,
    };
    Ok(output)
}

fn execute_category<C>(command: CategoryCommand, repo: &C) -> anyhow::Result<Value>
where
    C: CategoryRepository,
{
    let output = match command {
        CategoryCommand::Create {
            name,
            description,
            inactive,
        } => {
            let request = CreateCategoryRequest {
                name,
                description,
                is_active: !inactive,
            };
            serde_json::to_value(categories::create_category(request, repo)?)?
        }
        CategoryCommand::Get { id } => {
            serde_json::to_value(categories::get_category(GetCategoryRequest { id }, repo)?)?
        }
        CategoryCommand::List => serde_json::to_value(categories::list_categories(repo)?)?,
        CategoryCommand::Update {
            id,
            name,
            description,
            active,
        } => {
            let request = UpdateCategoryRequest {
                id,
                name,
                description,
                is_active: active,
            };
            categories::update_category(request, repo)?;
            Value::Null
        }
        CategoryCommand::Delete { id } => {
            categories::delete_category(DeleteCategoryRequest { id }, repo)?;
            Value::Null
        }
    };
    Ok(output)
}

fn execute_genre<G, C>(
    command: GenreCommand,
    genre_repo: &G,
    category_repo: &C,
) -> anyhow::Result<Value>
where
    G: GenreRepository,
    C: CategoryRepository,
{
    let output = match command {
        GenreCommand::Create {
            name,
            categories,
            inactive,
        } => {
            let request = CreateGenreRequest {
                name,
                category_ids: categories.into_iter().collect(),
                is_active: !inactive,
            };
            serde_json::to_value(genres::create_genre(request, genre_repo, category_repo)?)?
        }
        GenreCommand::Get { id } => {
            serde_json::to_value(genres::get_genre(GetGenreRequest { id }, genre_repo)?)?
        }
        GenreCommand::List => serde_json::to_value(genres::list_genres(genre_repo)?)?,
        GenreCommand::Update {
            id,
            name,
            active,
            categories,
            clear_categories,
        } => {
            let category_ids = if clear_categories {
                Some(BTreeSet::new())
            } else if categories.is_empty() {
                None
            } else {
                Some(categories.into_iter().collect())
            };
            let request = UpdateGenreRequest {
                id,
                name,
                is_active: active,
                category_ids,
            };
            genres::update_genre(request, genre_repo, category_repo)?;
            Value::Null
        }
        GenreCommand::Delete { id } => {
            genres::delete_genre(DeleteGenreRequest { id }, genre_repo)?;
            Value::Null
        }
    };
    Ok(output)
}
