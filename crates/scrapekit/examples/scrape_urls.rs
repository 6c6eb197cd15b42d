//! Example: Scrape live pages from every supported site
//!
//! Run with: cargo run -p scrapekit --example scrape_urls
//!
//! Fetches one known page per site and prints the title, filename and a
//! short preview of the rendered Markdown.

use scrapekit::{create_article_scraper, create_link_scraper, FetchOptions};

/// Page to scrape and the text its title should contain
struct Case {
    source: &'static str,
    url: &'static str,
    expect_title: &'static str,
}

const CASES: &[Case] = &[
    Case {
        source: "go",
        url: "https://go.dev/doc/tutorial/getting-started",
        expect_title: "Get started with Go",
    },
    Case {
        source: "microsoft",
        url: "https://learn.microsoft.com/en-us/azure/virtual-machines/overview",
        expect_title: "Virtual",
    },
    Case {
        source: "tofugu",
        url: "https://www.tofugu.com/japanese-grammar/wa-vs-ga/",
        expect_title: "Wa",
    },
];

#[tokio::main]
async fn main() {
    println!("scrapekit Examples");
    println!("==================\n");

    let mut failed = 0;

    for (i, case) in CASES.iter().enumerate() {
        println!("{}. {} ({})", i + 1, case.url, case.source);

        let scraper = match create_article_scraper(case.source, FetchOptions::default()) {
            Ok(scraper) => scraper,
            Err(e) => {
                println!("   Error: {}\n", e);
                failed += 1;
                continue;
            }
        };

        match scraper.scrape_title(case.url).await {
            Ok(title) if title.contains(case.expect_title) => {
                println!("   Title: {}", title);
                println!("   Filename: {}", scraper.filename_for(&title, case.url));
            }
            Ok(title) => {
                println!("   Expected title to contain '{}', got '{}'", case.expect_title, title);
                failed += 1;
            }
            Err(e) => {
                println!("   Error: {}", e);
                failed += 1;
            }
        }

        match scraper.scrape_article(case.url).await {
            Ok(markdown) => {
                let preview: String = markdown.chars().take(100).collect();
                println!("   Preview: {}\n", preview.replace('\n', " "));
            }
            Err(e) => {
                println!("   Error: {}\n", e);
                failed += 1;
            }
        }
    }

    println!("Guardian front page links");
    match create_link_scraper("guardian", FetchOptions::default()) {
        Ok(scraper) => match scraper.scrape_links("https://www.theguardian.com/international").await {
            Ok(links) => {
                for (label, url) in links.iter().take(5) {
                    println!("   [{}]({})", label, url);
                }
                println!("   {} links\n", links.len());
            }
            Err(e) => {
                println!("   Error: {}\n", e);
                failed += 1;
            }
        },
        Err(e) => {
            println!("   Error: {}\n", e);
            failed += 1;
        }
    }

    println!("==================");
    println!("{} failed", failed);

    if failed > 0 {
        std::process::exit(1);
    }
}
