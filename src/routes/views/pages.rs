use std::sync::Arc;

use askama::Template;
use axum::{Router, extract::State, response::Html, routing::get};

use crate::state::AppState;

use super::layout::{HtmlError, Layout, render};

pub struct Card {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub body: &'static str,
}

pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

pub static FEATURES: &[Card] = &[
    Card {
        icon: "code",
        title: "Développement Moderne",
        description: "Utilise les dernières technologies : Rust, axum et des templates compilés",
        body: "Profitez du typage fort, de l'asynchrone et des optimisations du compilateur pour une \
               expérience de développement exceptionnelle.",
    },
    Card {
        icon: "zap",
        title: "Performance Optimale",
        description: "Optimisations automatiques pour des temps de chargement ultra-rapides",
        body: "Pages rendues côté serveur, fichiers statiques servis directement et aucune surcharge \
               inutile pour des performances maximales.",
    },
    Card {
        icon: "palette",
        title: "Design Élégant",
        description: "Interface utilisateur moderne et responsive",
        body: "Composants réutilisables, design responsive et mise en page cohérente pour une \
               expérience utilisateur exceptionnelle.",
    },
];

pub static MISSION_POINTS: &[&str] = &[
    "Code de qualité et maintenable",
    "Performance et accessibilité",
    "Expérience utilisateur exceptionnelle",
];

pub static STATS: &[Stat] = &[
    Stat {
        value: "50+",
        label: "Projets Réalisés",
    },
    Stat {
        value: "100%",
        label: "Satisfaction Client",
    },
    Stat {
        value: "24/7",
        label: "Support",
    },
    Stat {
        value: "5+",
        label: "Années d'Expérience",
    },
];

pub static VALUES: &[Card] = &[
    Card {
        icon: "lightbulb",
        title: "Innovation",
        description: "Nous restons à la pointe des technologies pour offrir des solutions innovantes",
        body: "Nous explorons constamment de nouvelles technologies et méthodologies pour améliorer \
               nos processus de développement et la qualité de nos produits.",
    },
    Card {
        icon: "users",
        title: "Collaboration",
        description: "Le travail d'équipe et la communication sont au cœur de notre approche",
        body: "Nous croyons en la force du travail collaboratif, tant en interne qu'avec nos clients, \
               pour créer des solutions qui dépassent les attentes.",
    },
    Card {
        icon: "globe",
        title: "Impact",
        description: "Nous créons des solutions qui ont un impact positif sur les utilisateurs",
        body: "Chaque projet que nous réalisons vise à améliorer l'expérience des utilisateurs et à \
               créer de la valeur pour nos clients et leur communauté.",
    },
];

pub static TECHNOLOGIES: &[&str] = &[
    "Rust",
    "Tokio",
    "Axum",
    "Askama",
    "SeaORM",
    "PostgreSQL",
    "Tracing",
    "Serde",
    "Git",
    "Docker",
];

#[derive(Template)]
#[template(path = "index.html")]
struct IndexTemplate {
    layout: Layout,
    features: &'static [Card],
}

#[derive(Template)]
#[template(path = "about.html")]
struct AboutTemplate {
    layout: Layout,
    mission_points: &'static [&'static str],
    stats: &'static [Stat],
    values: &'static [Card],
    technologies: &'static [&'static str],
}

#[derive(Template)]
#[template(path = "not_available.html")]
struct NotAvailableTemplate {
    layout: Layout,
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/about", get(about))
        .route("/not-available", get(not_available_view))
        .with_state(state)
}

async fn index(State(state): State<Arc<AppState>>) -> Result<Html<String>, HtmlError> {
    let rendered = render(
        IndexTemplate {
            layout: Layout::new(&state.config, "home"),
            features: FEATURES,
        },
        "index",
    )?;
    Ok(Html(rendered))
}

async fn about(State(state): State<Arc<AppState>>) -> Result<Html<String>, HtmlError> {
    let rendered = render(
        AboutTemplate {
            layout: Layout::new(&state.config, "about"),
            mission_points: MISSION_POINTS,
            stats: STATS,
            values: VALUES,
            technologies: TECHNOLOGIES,
        },
        "about",
    )?;
    Ok(Html(rendered))
}

async fn not_available_view(State(state): State<Arc<AppState>>) -> Result<Html<String>, HtmlError> {
    let rendered = render(
        NotAvailableTemplate {
            layout: Layout::new(&state.config, ""),
        },
        "not available",
    )?;
    Ok(Html(rendered))
}
