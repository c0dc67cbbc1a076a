use colored::Colorize;
use serde::Serialize;

use crate::deck::{Deck, Slide};
use crate::render::text::counter_label;

#[derive(Serialize)]
struct DeckDump<'a> {
    title: &'a str,
    slide_count: usize,
    slides: &'a [Slide],
}

pub fn run(json: bool) -> anyhow::Result<()> {
    let deck = Deck::builtin()?;
    if json {
        println!("{}", to_json(&deck)?);
    } else {
        print!("{}", outline(&deck));
    }
    Ok(())
}

fn to_json(deck: &Deck) -> anyhow::Result<String> {
    let dump = DeckDump {
        title: deck.title(),
        slide_count: deck.len(),
        slides: deck.slides(),
    };
    Ok(serde_json::to_string_pretty(&dump)?)
}

/// One line per slide: counter, theme, eyebrow and title.
fn outline(deck: &Deck) -> String {
    let mut out = format!("{}\n\n", deck.title().bold());
    for (index, slide) in deck.slides().iter().enumerate() {
        let eyebrow = slide.eyebrow.unwrap_or("");
        out.push_str(&format!(
            "  {}  {:<9} {:<24} {}\n",
            counter_label(index, deck.len()).dimmed(),
            slide.theme.as_str().cyan(),
            eyebrow.dimmed(),
            slide.title,
        ));
    }
    out
}
