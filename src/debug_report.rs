use hansik::{FilterCriteria, Listing, QueryDetails, SelectionSet, classify, fired_rules, user_message};

mod ansi {
    pub const RESET: &str = "\x1b[0m";
    pub const DIM: &str = "\x1b[2m";
    pub const BOLD: &str = "\x1b[1m";

    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const BLUE: &str = "\x1b[34m";
    pub const CYAN: &str = "\x1b[36m";
    pub const GRAY: &str = "\x1b[90m";

    pub struct Palette {
        enabled: bool,
    }

    impl Palette {
        pub fn new(enabled: bool) -> Self {
            Self { enabled }
        }

        pub fn paint(&self, s: impl AsRef<str>, color: &str) -> String {
            if self.enabled { format!("{}{}{}", color, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }

        pub fn bold(&self, s: impl AsRef<str>) -> String {
            if self.enabled { format!("{}{}{}", BOLD, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }

        pub fn dim(&self, s: impl AsRef<str>) -> String {
            if self.enabled { format!("{}{}{}", DIM, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }
    }
}

pub fn print_discovery(criteria: &FilterCriteria, listings: &[Listing<'_>], details: &QueryDetails, color: bool) {
    let palette = ansi::Palette::new(color);
    println!("\n{}", palette.bold(palette.paint(format!("⚙  Discover: sort by {}", criteria.sort), ansi::CYAN)));

    println!("\n{}", palette.paint("━━━ Stages ━━━", ansi::GRAY));
    print_stages(details, &palette);

    println!("\n{}", palette.paint("━━━ Results ━━━", ansi::GRAY));
    if listings.is_empty() {
        println!("{}", palette.dim("  No restaurants matched"));
        println!("\n{}", palette.paint("Possible reasons:", ansi::YELLOW));
        println!("  • Price tier or cuisine matched nothing (cuisine is case-sensitive)");
        println!("  • Records lack a location, so the proximity filter dropped them");
        println!("  • The radius is too small for the given origin");
        println!("\n{}", palette.dim("  Tip: Set HANSIK_LOG=hansik=trace to see per-stage counts"));
    } else {
        print_listings(listings, &palette);
    }

    println!("\n{}", palette.paint("━━━ Timing ━━━", ansi::GRAY));
    println!("  Total: {}", palette.paint(format!("{:?}", details.total), ansi::GREEN));
    println!();
}

fn print_stages(details: &QueryDetails, palette: &ansi::Palette) {
    let active = details.active.names();
    let active = if active.is_empty() { "none".to_string() } else { active.join(", ") };
    println!("  {} {}", palette.dim("active filters:"), palette.paint(active, ansi::BLUE));

    for stage in &details.stages {
        let dropped = stage.input - stage.kept;
        println!(
            "  {} {} {}",
            palette.paint(format!("{:<11}", stage.stage), ansi::BLUE),
            if dropped > 0 {
                palette.paint(format!("{} → {} (−{})", stage.input, stage.kept, dropped), ansi::YELLOW)
            } else {
                palette.paint(format!("{} → {}", stage.input, stage.kept), ansi::GREEN)
            },
            palette.dim(format!("{:?}", stage.duration)),
        );
    }
}

fn print_listings(listings: &[Listing<'_>], palette: &ansi::Palette) {
    for (idx, listing) in listings.iter().enumerate() {
        let r = listing.record;
        let rating = if r.rating > 0.0 { format!("★ {:.1}", r.rating) } else { "★ -".to_string() };
        println!(
            "  {} {} {} {} {}",
            palette.paint(format!("[{}]", idx), ansi::GRAY),
            palette.bold(palette.paint(&r.id, ansi::GREEN)),
            palette.dim("│"),
            palette.paint(rating, ansi::YELLOW),
            palette.dim(format!("({} reviews)", r.review_count)),
        );
        println!(
            "      {} {}  {} {}  {} {}  {} {}",
            palette.dim("cuisine:"),
            palette.paint(&r.cuisine, ansi::BLUE),
            palette.dim("│ price:"),
            palette.paint("₩".repeat(usize::from(r.price_tier)), ansi::CYAN),
            palette.dim("│ distance:"),
            palette.paint(listing.distance_label().unwrap_or_else(|| "-".to_string()), ansi::CYAN),
            palette.dim("│ popularity:"),
            palette.paint(format!("{} ({})", listing.popularity.score, listing.popularity.tier), ansi::CYAN),
        );
        if !r.district.is_empty() {
            println!("      {} {}", palette.dim("district:"), r.district);
        }
    }
}

pub fn print_concierge(set: &SelectionSet, text: &str, reply: &str, color: bool) {
    let palette = ansi::Palette::new(color);

    println!("\n{}", palette.paint("━━━ You ━━━", ansi::GRAY));
    println!("{}", user_message(set, text));

    let classes = classify(set);
    let fired = fired_rules(set);
    println!("\n{}", palette.paint("━━━ Classification ━━━", ansi::GRAY));
    println!("  {} {}", palette.dim("food style:"), palette.paint(classes.food_styles.join(", "), ansi::BLUE));
    println!("  {} {}", palette.dim("occasion:  "), palette.paint(classes.occasions.join(", "), ansi::BLUE));
    println!("  {} {}", palette.dim("constraint:"), palette.paint(classes.constraints.join(", "), ansi::BLUE));
    println!("  {} {}", palette.dim("rules fired:"), palette.paint(fired.len().to_string(), ansi::YELLOW));

    println!("\n{}", palette.paint("━━━ Concierge ━━━", ansi::GRAY));
    println!("{}", palette.paint(reply, ansi::GREEN));
    println!();
}
