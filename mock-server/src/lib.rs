use std::{collections::BTreeMap, sync::Arc};

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use chrono::{Local, NaiveDateTime};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Draft,
    #[default]
    Published,
    Archived,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub id: i64,
    pub title: String,
    pub excerpt: Option<String>,
    pub content: Option<String>,
    pub author: Option<String>,
    pub category: Option<String>,
    pub reading_time: Option<i32>,
    pub views: Option<i32>,
    pub likes: Option<i32>,
    pub status: Status,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
    pub published_at: Option<NaiveDateTime>,
    pub tags: Vec<Tag>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tag {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub color: Option<String>,
    pub created_at: NaiveDateTime,
}

#[derive(Deserialize)]
pub struct TagRef {
    pub id: i64,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleInput {
    pub title: String,
    pub excerpt: Option<String>,
    pub content: Option<String>,
    pub author: Option<String>,
    pub category: Option<String>,
    pub reading_time: Option<i32>,
    #[serde(default)]
    pub status: Status,
    #[serde(default)]
    pub tags: Vec<TagRef>,
}

#[derive(Deserialize)]
pub struct TagInput {
    pub name: String,
    pub description: Option<String>,
    pub color: Option<String>,
}

#[derive(Default, Deserialize)]
pub struct ArticleFilter {
    pub search: Option<String>,
    pub category: Option<String>,
}

impl ArticleFilter {
    fn matches(&self, article: &Article) -> bool {
        let keyword_ok = self.search.as_deref().map_or(true, |keyword| {
            let keyword = keyword.to_lowercase();
            [Some(&article.title), article.excerpt.as_ref(), article.content.as_ref()]
                .into_iter()
                .flatten()
                .any(|text| text.to_lowercase().contains(&keyword))
        });
        let category_ok = self
            .category
            .as_deref()
            .map_or(true, |category| article.category.as_deref() == Some(category));
        keyword_ok && category_ok
    }
}

/// In-memory tables with per-table id sequences.
#[derive(Default)]
pub struct Store {
    articles: BTreeMap<i64, Article>,
    tags: BTreeMap<i64, Tag>,
    last_article_id: i64,
    last_tag_id: i64,
}

impl Store {
    fn resolve_tags(&self, refs: &[TagRef]) -> Vec<Tag> {
        refs.iter()
            .filter_map(|r| self.tags.get(&r.id).cloned())
            .collect()
    }
}

pub type Db = Arc<RwLock<Store>>;

fn now() -> NaiveDateTime {
    Local::now().naive_local()
}

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(Store::default()));
    let api = Router::new()
        .route("/articles", get(list_articles).post(create_article))
        .route(
            "/articles/{id}",
            get(get_article).put(update_article).delete(delete_article),
        )
        .route("/tags", get(list_tags).post(create_tag))
        .route("/tags/{id}", get(get_tag).put(update_tag).delete(delete_tag))
        .with_state(db);
    Router::new().nest("/api", api)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn list_articles(
    State(db): State<Db>,
    Query(filter): Query<ArticleFilter>,
) -> Json<Vec<Article>> {
    let store = db.read().await;
    Json(
        store
            .articles
            .values()
            .filter(|article| filter.matches(article))
            .cloned()
            .collect(),
    )
}

async fn create_article(
    State(db): State<Db>,
    Json(input): Json<ArticleInput>,
) -> (StatusCode, Json<Article>) {
    let mut store = db.write().await;
    store.last_article_id += 1;
    let created_at = now();
    let article = Article {
        id: store.last_article_id,
        tags: store.resolve_tags(&input.tags),
        title: input.title,
        excerpt: input.excerpt,
        content: input.content,
        author: input.author,
        category: input.category,
        reading_time: input.reading_time,
        views: Some(0),
        likes: Some(0),
        status: input.status,
        created_at,
        updated_at: created_at,
        published_at: (input.status == Status::Published).then_some(created_at),
    };
    store.articles.insert(article.id, article.clone());
    log::info!("created article {}", article.id);
    (StatusCode::CREATED, Json(article))
}

async fn get_article(
    State(db): State<Db>,
    Path(id): Path<i64>,
) -> Result<Json<Article>, StatusCode> {
    let store = db.read().await;
    store.articles.get(&id).cloned().map(Json).ok_or(StatusCode::NOT_FOUND)
}

async fn update_article(
    State(db): State<Db>,
    Path(id): Path<i64>,
    Json(input): Json<ArticleInput>,
) -> Result<Json<Article>, StatusCode> {
    let mut store = db.write().await;
    let tags = store.resolve_tags(&input.tags);
    let article = store.articles.get_mut(&id).ok_or(StatusCode::NOT_FOUND)?;
    let updated_at = now();
    if input.status == Status::Published && article.published_at.is_none() {
        article.published_at = Some(updated_at);
    }
    article.title = input.title;
    article.excerpt = input.excerpt;
    article.content = input.content;
    article.author = input.author;
    article.category = input.category;
    article.reading_time = input.reading_time;
    article.status = input.status;
    article.tags = tags;
    article.updated_at = updated_at;
    log::info!("updated article {id}");
    Ok(Json(article.clone()))
}

async fn delete_article(
    State(db): State<Db>,
    Path(id): Path<i64>,
) -> Result<StatusCode, StatusCode> {
    let mut store = db.write().await;
    store.articles.remove(&id).ok_or(StatusCode::NOT_FOUND)?;
    log::info!("deleted article {id}");
    Ok(StatusCode::NO_CONTENT)
}

async fn list_tags(State(db): State<Db>) -> Json<Vec<Tag>> {
    let store = db.read().await;
    Json(store.tags.values().cloned().collect())
}

async fn create_tag(
    State(db): State<Db>,
    Json(input): Json<TagInput>,
) -> (StatusCode, Json<Tag>) {
    let mut store = db.write().await;
    store.last_tag_id += 1;
    let tag = Tag {
        id: store.last_tag_id,
        name: input.name,
        description: input.description,
        color: input.color,
        created_at: now(),
    };
    store.tags.insert(tag.id, tag.clone());
    log::info!("created tag {}", tag.id);
    (StatusCode::CREATED, Json(tag))
}

async fn get_tag(State(db): State<Db>, Path(id): Path<i64>) -> Result<Json<Tag>, StatusCode> {
    let store = db.read().await;
    store.tags.get(&id).cloned().map(Json).ok_or(StatusCode::NOT_FOUND)
}

async fn update_tag(
    State(db): State<Db>,
    Path(id): Path<i64>,
    Json(input): Json<TagInput>,
) -> Result<Json<Tag>, StatusCode> {
    let mut store = db.write().await;
    let tag = store.tags.get_mut(&id).ok_or(StatusCode::NOT_FOUND)?;
    tag.name = input.name;
    tag.description = input.description;
    tag.color = input.color;
    let tag = tag.clone();
    // Articles embed full tag copies; keep them in step with the tag table.
    for embedded in store
        .articles
        .values_mut()
        .flat_map(|article| article.tags.iter_mut())
        .filter(|embedded| embedded.id == id)
    {
        *embedded = tag.clone();
    }
    log::info!("updated tag {id}");
    Ok(Json(tag))
}

async fn delete_tag(
    State(db): State<Db>,
    Path(id): Path<i64>,
) -> Result<StatusCode, StatusCode> {
    let mut store = db.write().await;
    store.tags.remove(&id).ok_or(StatusCode::NOT_FOUND)?;
    for article in store.articles.values_mut() {
        article.tags.retain(|tag| tag.id != id);
    }
    log::info!("deleted tag {id}");
    Ok(StatusCode::NO_CONTENT)
}
