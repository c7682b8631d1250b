use std::sync::Arc;

use typetutor_core::service::trigraph::DEFAULT_WORD_COUNT;
use typetutor_core::{CatalogService, ContentStore, FsStore, Sampler, TrigraphService};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Serve the content shipped with the repository (trigraphs + code collections)
    let store: Arc<dyn ContentStore> = Arc::new(FsStore::new("./static/content"));

    // A fixed seed gives the same drill on every run; use Sampler::new() for fresh ones
    let trigraphs = TrigraphService::new(Arc::clone(&store), Sampler::seeded(2024));
    let catalog = CatalogService::new(store, Sampler::new());

    // List every word list and draw a drill from each
    for name in trigraphs.list_corpora()? {
        let words = trigraphs.get_sample(&name, DEFAULT_WORD_COUNT)?;
        println!("[{name}] {}", words.join(" "));
    }

    // Asking for more words than a list holds returns the whole list, shuffled
    match trigraphs.get_sample("the", 10_000) {
        Ok(words) => println!("'the' holds {} words", words.len()),
        Err(e) => println!("No 'the' word list: {e}"),
    }

    // Unknown lists are reported, not panicked on
    match trigraphs.get_sample("unknown", 5) {
        Ok(_) => println!("Should not happen"),
        Err(e) => println!("{e}"),
    }

    // Walk the catalog: languages -> collections -> snippets
    for language in &catalog.list_languages()?.0 {
        println!("\n{} {} ({})", language.icon, language.name, language.code);

        let collections = match catalog.list_collections(&language.code) {
            Ok(c) => c,
            Err(e) => {
                println!("  {e}");
                continue;
            }
        };

        for collection in collections {
            println!(
                "  - {} [{}] {} snippet(s)",
                collection.name, collection.difficulty, collection.snippet_count
            );
            for snippet in catalog.get_snippets(&language.code, &collection.id)? {
                let title = snippet.snippet.title().unwrap_or("untitled");
                println!("      #{} {title}", snippet.index);
            }
        }

        if let Ok(random) = catalog.random_snippet(&language.code) {
            println!(
                "  random pick: {}#{} out of {}",
                random.collection_id, random.snippet.index, random.total_snippets
            );
        }
    }

    Ok(())
}
