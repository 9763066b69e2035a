use std::error::Error;

use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;

use catalog_content::{gout, ophthalmology, topics, viral, Catalog};
use catalog_core::{
    constants::{REQUIRE_TRANSLATIONS_ENV, STRICT_REFERENCES_ENV},
    validate_corpus, CatalogConfig, CatalogRecord, CategoryTag, DomainCollection, Relationship,
    ValidationPolicy,
};

#[derive(Parser)]
#[command(name = "catalog")]
#[command(about = "Medical education catalog query tool")]
struct Cli {
    /// Output format
    #[arg(long, value_enum, global = true, default_value_t = Format::Text)]
    format: Format,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
    Yaml,
}

#[derive(Subcommand)]
enum Commands {
    /// List every collection with its entry count
    Collections,
    /// Count the entries in a collection
    Count {
        /// Collection name, e.g. ophthalmology
        collection: String,
    },
    /// Show one entry
    Get {
        collection: String,
        /// Entry id (slug)
        id: String,
    },
    /// Case-insensitive substring search over the searchable fields
    Search {
        collection: String,
        query: String,
    },
    /// Entries in one category
    Category {
        collection: String,
        category: String,
    },
    /// Entries whose attribute field mentions a value
    Attribute {
        collection: String,
        value: String,
    },
    /// Outgoing cross-references of an entry
    Neighbors {
        id: String,
        /// Only follow this relationship (parent, child, sibling, related, see-also)
        #[arg(long)]
        relationship: Option<Relationship>,
    },
    /// Entries that reference an id
    References { id: String },
    /// Run the corpus validation pass
    Validate {
        /// Treat dangling cross-references as errors
        #[arg(long)]
        strict: bool,
    },
}

/// One query against a single named collection.
enum Query<'a> {
    Count,
    Get(&'a str),
    Search(&'a str),
    Category(&'a str),
    Attribute(&'a str),
}

#[derive(Serialize)]
struct CollectionSummary<'a> {
    name: &'a str,
    entries: usize,
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    let Some(command) = cli.command else {
        println!("Use 'catalog --help' for commands");
        return Ok(());
    };

    let catalog = Catalog::load()?;
    let output = execute(&catalog, &command, cli.format)?;
    print!("{output}");

    Ok(())
}

fn execute(catalog: &Catalog, command: &Commands, format: Format) -> Result<String, Box<dyn Error>> {
    match command {
        Commands::Collections => {
            let summaries: Vec<_> = catalog
                .corpus()
                .collections()
                .map(|c| CollectionSummary {
                    name: c.name(),
                    entries: c.entry_count(),
                })
                .collect();
            render(&summaries, format, |items| {
                items
                    .iter()
                    .map(|s| format!("{}\t{}\n", s.name, s.entries))
                    .collect()
            })
        }
        Commands::Count { collection } => dispatch(catalog, collection, Query::Count, format),
        Commands::Get { collection, id } => dispatch(catalog, collection, Query::Get(id), format),
        Commands::Search { collection, query } => {
            dispatch(catalog, collection, Query::Search(query), format)
        }
        Commands::Category {
            collection,
            category,
        } => dispatch(catalog, collection, Query::Category(category), format),
        Commands::Attribute { collection, value } => {
            dispatch(catalog, collection, Query::Attribute(value), format)
        }
        Commands::Neighbors { id, relationship } => {
            let neighbors = catalog.corpus().neighbors(id, *relationship);
            render(&neighbors, format, |items| {
                if items.is_empty() {
                    return format!("No cross-references from '{id}'\n");
                }
                items
                    .iter()
                    .map(|n| {
                        let marker = if n.resolved { "" } else { "\t(unresolved)" };
                        format!("{}\t{}{}\n", n.relationship, n.id, marker)
                    })
                    .collect()
            })
        }
        Commands::References { id } => {
            let sources = catalog.corpus().reverse_neighbors(id);
            render(&sources, format, |items| {
                if items.is_empty() {
                    return format!("Nothing references '{id}'\n");
                }
                items.iter().map(|s| format!("{s}\n")).collect()
            })
        }
        Commands::Validate { strict } => {
            let config = CatalogConfig::from_env_values(
                std::env::var(STRICT_REFERENCES_ENV).ok(),
                std::env::var(REQUIRE_TRANSLATIONS_ENV).ok(),
            )?;
            let mut policy = ValidationPolicy::from(&config);
            policy.strict_references |= *strict;

            let report = validate_corpus(catalog.corpus(), &policy);
            let output = render(&report, format, |r| {
                let mut text: String = r.issues().iter().map(|i| format!("{i}\n")).collect();
                text.push_str(&format!(
                    "{} error(s), {} warning(s)\n",
                    r.error_count(),
                    r.warning_count()
                ));
                text
            })?;
            if report.error_count() > 0 {
                print!("{output}");
                report.into_result()?;
            }
            Ok(output)
        }
    }
}

fn dispatch(
    catalog: &Catalog,
    collection: &str,
    query: Query<'_>,
    format: Format,
) -> Result<String, Box<dyn Error>> {
    match collection {
        ophthalmology::COLLECTION => run_query(catalog.ophthalmology(), query, format),
        gout::COLLECTION => run_query(catalog.gout(), query, format),
        viral::COLLECTION => run_query(catalog.viral(), query, format),
        topics::COLLECTION => run_query(catalog.topics(), query, format),
        other => {
            let known: Vec<_> = catalog.corpus().collections().map(|c| c.name()).collect();
            Err(format!("unknown collection '{other}' (known: {})", known.join(", ")).into())
        }
    }
}

fn run_query<E>(
    collection: &DomainCollection<E>,
    query: Query<'_>,
    format: Format,
) -> Result<String, Box<dyn Error>>
where
    E: CatalogRecord + Serialize,
{
    match query {
        Query::Count => render(&collection.count(), format, |n| format!("{n}\n")),
        Query::Get(id) => match collection.get_by_id(id) {
            Some(entry) => match format {
                // A single record has no compact line form; YAML reads well in a terminal.
                Format::Text => Ok(serde_yaml::to_string(entry)?),
                _ => render(entry, format, |_| String::new()),
            },
            None => Err(format!("no entry '{id}' in {}", collection.name()).into()),
        },
        Query::Search(text) => render_list(collection.search(text), format),
        Query::Category(category) => {
            if E::Category::parse(category).is_none() {
                let known: Vec<_> = E::Category::ALL.iter().map(|c| c.as_str()).collect();
                eprintln!(
                    "'{category}' is not a category of {} (known: {})",
                    collection.name(),
                    known.join(", ")
                );
            }
            render_list(collection.filter_by_category(category), format)
        }
        Query::Attribute(value) => render_list(collection.filter_by_attribute(value), format),
    }
}

fn render_list<E>(entries: Vec<&E>, format: Format) -> Result<String, Box<dyn Error>>
where
    E: CatalogRecord + Serialize,
{
    render(&entries, format, |items| {
        if items.is_empty() {
            return "No matching entries\n".to_owned();
        }
        items
            .iter()
            .map(|e| format!("{}\t{}\n", e.id(), e.category().as_str()))
            .collect()
    })
}

fn render<T>(value: &T, format: Format, text: impl FnOnce(&T) -> String) -> Result<String, Box<dyn Error>>
where
    T: Serialize + ?Sized,
{
    Ok(match format {
        Format::Text => text(value),
        Format::Json => format!("{}\n", serde_json::to_string_pretty(value)?),
        Format::Yaml => serde_yaml::to_string(value)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(args: &[&str]) -> Result<String, Box<dyn Error>> {
        let cli = Cli::try_parse_from(std::iter::once("catalog").chain(args.iter().copied()))
            .expect("arguments should parse");
        let catalog = Catalog::load().expect("seeded catalog should load");
        let command = cli.command.expect("a subcommand was given");
        execute(&catalog, &command, cli.format)
    }

    #[test]
    fn count_prints_number_of_entries() {
        let out = run(&["count", "ophthalmology"]).expect("count should succeed");
        assert_eq!(out, "6\n");
    }

    #[test]
    fn category_lists_ids_with_their_category() {
        let out = run(&["category", "ophthalmology", "emergency"]).expect("category should succeed");
        assert_eq!(out, "retinal-detachment\temergency\n");
    }

    #[test]
    fn search_as_json_returns_an_array() {
        let out = run(&["search", "ophthalmology", "vision", "--format", "json"])
            .expect("search should succeed");
        let value: serde_json::Value = serde_json::from_str(&out).expect("valid json");
        let ids: Vec<_> = value
            .as_array()
            .expect("array")
            .iter()
            .filter_map(|e| e["id"].as_str())
            .collect();
        assert!(ids.contains(&"cataracts"));
        assert!(!ids.contains(&"conjunctivitis"));
    }

    #[test]
    fn get_unknown_id_is_an_error() {
        let err = run(&["get", "ophthalmology", "nope"]).expect_err("missing id");
        assert!(err.to_string().contains("nope"));
    }

    #[test]
    fn unknown_collection_is_an_error() {
        let err = run(&["count", "cardiology"]).expect_err("unknown collection");
        assert!(err.to_string().contains("cardiology"));
    }

    #[test]
    fn neighbors_can_filter_by_relationship() {
        let out = run(&["neighbors", "eye-anatomy", "--relationship", "child"])
            .expect("neighbors should succeed");
        assert_eq!(out.lines().count(), 4);
        assert!(out.lines().all(|l| l.starts_with("child\t")));
    }

    #[test]
    fn bad_relationship_is_rejected_by_the_parser() {
        let parsed = Cli::try_parse_from(["catalog", "neighbors", "gout", "--relationship", "cousin"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn references_lists_sources() {
        let out = run(&["references", "purine-rich-diet"]).expect("references should succeed");
        assert_eq!(out, "gout\n");
    }
}
