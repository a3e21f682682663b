//! Render adapters: one pure function per entry type.
//!
//! A [`Fragment`] is the markup-independent card description. The desktop
//! shell turns it into Dioxus elements; [`Fragment::to_html`] produces the
//! static markup used by headless pages.

use serde::Serialize;

use crate::types::{CatalogEntry, EntryType, Tier};

/// Card variant, one per entry type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CardKind {
    Storefront,
    Partnership,
    Code,
}

impl CardKind {
    /// Root CSS class of the card
    pub fn class(&self) -> &'static str {
        match self {
            CardKind::Storefront => "storefront-card",
            CardKind::Partnership => "partnership-card",
            CardKind::Code => "code-card",
        }
    }
}

/// Copy affordance attached to code cards
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CopyAction {
    pub code: String,
    pub label: String,
}

/// Rendered card
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Fragment {
    pub kind: CardKind,
    /// `data-id`
    pub id: String,
    /// `data-category`
    pub category_slug: String,
    /// `data-tier`
    pub tier: Tier,
    pub classes: Vec<&'static str>,
    pub badge: Option<&'static str>,
    pub title: String,
    pub category: String,
    pub description: String,
    pub link_url: String,
    pub link_label: &'static str,
    pub copy: Option<CopyAction>,
}

/// Dispatch on entry type
pub fn render_entry(entry: &CatalogEntry) -> Fragment {
    match entry.entry_type {
        EntryType::Storefront => render_storefront(entry),
        EntryType::Partnership => render_partnership(entry),
        EntryType::Perk => render_perk(entry),
    }
}

pub fn render_storefront(entry: &CatalogEntry) -> Fragment {
    let mut fragment = base(entry, CardKind::Storefront, "Shop the edit");
    if entry.tier == Tier::Hero {
        fragment.classes.push("hero-card");
        fragment.badge = Some("Signature");
    }
    fragment
}

pub fn render_partnership(entry: &CatalogEntry) -> Fragment {
    let mut fragment = base(entry, CardKind::Partnership, "Learn more");
    if entry.featured {
        fragment.badge = Some("Partner");
    }
    fragment
}

pub fn render_perk(entry: &CatalogEntry) -> Fragment {
    let mut fragment = base(entry, CardKind::Code, "Visit store");
    if entry.featured {
        fragment.classes.push("featured-card");
        fragment.badge = Some("Featured");
    }
    fragment.copy = entry.discount_code.as_ref().map(|code| CopyAction {
        code: code.clone(),
        label: format!("Copy code {}", code),
    });
    fragment
}

fn base(entry: &CatalogEntry, kind: CardKind, link_label: &'static str) -> Fragment {
    let mut classes = vec![kind.class()];
    if entry.tier == Tier::Additional {
        classes.push("additional-card");
    }
    Fragment {
        kind,
        id: entry.id.clone(),
        category_slug: entry.category_slug(),
        tier: entry.tier,
        classes,
        badge: None,
        title: entry.brand_name.clone(),
        category: entry.category.clone(),
        description: entry.short_description.clone(),
        link_url: entry.link_url.clone(),
        link_label,
        copy: None,
    }
}

impl Fragment {
    /// Space-joined class attribute
    pub fn class_attr(&self) -> String {
        self.classes.join(" ")
    }

    /// Static markup for the card
    pub fn to_html(&self) -> String {
        let mut html = format!(
            r#"<article class="{}" data-id="{}" data-category="{}" data-tier="{}">"#,
            self.class_attr(),
            escape(&self.id),
            escape(&self.category_slug),
            self.tier.as_str(),
        );
        if let Some(badge) = self.badge {
            html.push_str(&format!(r#"<span class="card-badge">{}</span>"#, badge));
        }
        html.push_str(&format!(
            r#"<h3 class="card-title">{}</h3><p class="card-category">{}</p>"#,
            escape(&self.title),
            escape(&self.category),
        ));
        if !self.description.is_empty() {
            html.push_str(&format!(
                r#"<p class="card-description">{}</p>"#,
                escape(&self.description)
            ));
        }
        if let Some(copy) = &self.copy {
            html.push_str(&format!(
                r#"<button class="copy-code-btn" data-code="{code}" aria-label="{label}"><code>{code}</code></button>"#,
                code = escape(&copy.code),
                label = escape(&copy.label),
            ));
        }
        html.push_str(&format!(
            r#"<a class="card-link" href="{}" target="_blank" rel="noopener">{}</a></article>"#,
            escape(&self.link_url),
            self.link_label,
        ));
        html
    }
}

/// Minimal HTML text/attribute escaping
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
