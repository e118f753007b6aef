use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::collections::HashSet;
use std::error::Error;
use std::sync::Arc;
use tracing::{info, warn};

use chemref::accessors::{ElementFacets, QuestionFacets, ReactionFacets};
use chemref::bundle;
use chemref::catalog::{Catalog, Category, Question};
use chemref::config::Config;
use chemref::error::{PathError, SelectionError};
use chemref::filter::{
    paginate, search_with, Combine, ElementFilter, QuestionFilter, ReactionFilter, Selection,
};
use chemref::layout::{GRID_COLS, GRID_ROWS};
use chemref::progress::{PathProgress, TopicState};
use chemref::quiz::QuizSession;
use chemref::PeriodicGrid;

type AppState = Arc<Catalog>;

const DEFAULT_PER_PAGE: usize = 50;
const DEFAULT_QUIZ_LENGTH: usize = 10;

#[derive(Deserialize, Default)]
struct ElementQuery {
    query: Option<String>,
    category: Option<String>,
    block: Option<String>,
    period: Option<String>,
    group: Option<String>,
    state: Option<String>,
    level: Option<String>,
    mode: Option<String>,
    page: Option<usize>,
    per_page: Option<usize>,
}

impl ElementQuery {
    fn filter(&self) -> Result<ElementFilter, SelectionError> {
        Ok(ElementFilter {
            category: Selection::from_query(self.category.as_deref())?,
            block: Selection::from_query(self.block.as_deref())?,
            period: Selection::<u8>::number_from_query("period", self.period.as_deref())?,
            group: Selection::<u8>::number_from_query("group", self.group.as_deref())?,
            state: Selection::from_query(self.state.as_deref())?,
            level: Selection::from_query(self.level.as_deref())?,
        })
    }
}

#[derive(Deserialize, Default)]
struct ReactionQuery {
    query: Option<String>,
    category: Option<String>,
    difficulty: Option<String>,
    class: Option<String>,
    chapter: Option<String>,
    #[serde(rename = "type")]
    kind: Option<String>,
    mode: Option<String>,
    page: Option<usize>,
    per_page: Option<usize>,
}

impl ReactionQuery {
    fn filter(&self) -> Result<ReactionFilter, SelectionError> {
        Ok(ReactionFilter {
            category: Selection::from_query(self.category.as_deref())?,
            difficulty: Selection::from_query(self.difficulty.as_deref())?,
            class: Selection::from_query(self.class.as_deref())?,
            chapter: Selection::text_from_query(self.chapter.as_deref()),
            kind: Selection::text_from_query(self.kind.as_deref()),
        })
    }
}

#[derive(Deserialize, Default)]
struct QuestionQuery {
    query: Option<String>,
    difficulty: Option<String>,
    exam: Option<String>,
    topic: Option<String>,
    chapter: Option<String>,
    mode: Option<String>,
    page: Option<usize>,
    per_page: Option<usize>,
    seed: Option<u64>,
    count: Option<usize>,
}

impl QuestionQuery {
    fn filter(&self) -> Result<QuestionFilter, SelectionError> {
        Ok(QuestionFilter {
            difficulty: Selection::from_query(self.difficulty.as_deref())?,
            exam: Selection::from_query(self.exam.as_deref())?,
            topic: Selection::text_from_query(self.topic.as_deref()),
            chapter: Selection::text_from_query(self.chapter.as_deref()),
        })
    }
}

#[derive(Deserialize, Default)]
struct ProgressQuery {
    /// Comma-separated topic ids, completed in the order given.
    completed: Option<String>,
}

#[derive(Serialize)]
struct GridCell<'a> {
    row: usize,
    col: usize,
    atomic_number: u8,
    symbol: &'a str,
    name: &'a str,
    category: Category,
    matched: bool,
}

#[derive(Serialize)]
struct GridResponse<'a> {
    rows: usize,
    cols: usize,
    cells: Vec<GridCell<'a>>,
}

#[derive(Serialize)]
struct QuizCard<'a> {
    id: &'a str,
    prompt: &'a str,
    options: &'a [String],
    time_limit: u32,
    marks: u32,
}

#[derive(Serialize)]
struct ProgressResponse<'a> {
    path: &'a str,
    percent_complete: u32,
    topics: Vec<TopicState<'a>>,
}

enum ApiError {
    BadRequest(String),
    NotFound(String),
}

impl From<SelectionError> for ApiError {
    fn from(err: SelectionError) -> Self {
        ApiError::BadRequest(err.to_string())
    }
}

impl From<PathError> for ApiError {
    fn from(err: PathError) -> Self {
        match err {
            PathError::UnknownTopic(_) => ApiError::NotFound(err.to_string()),
            PathError::Locked { .. } => ApiError::BadRequest(err.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest(message) => (StatusCode::BAD_REQUEST, message),
            ApiError::NotFound(message) => (StatusCode::NOT_FOUND, message),
        };
        warn!(%status, %message, "request rejected");
        (status, Json(json!({ "error": message }))).into_response()
    }
}

const INDEX_HTML: &str = r##"<!doctype html>
<html lang="en">
  <head>
    <meta charset="utf-8" />
    <title>Periodic Table</title>
    <style>
      body { font-family: system-ui, sans-serif; margin: 24px; background: #10131a; color: #e6e6e6; }
      #controls { display: flex; gap: 8px; margin-bottom: 16px; }
      #table { display: grid; grid-template-columns: repeat(18, 52px); grid-auto-rows: 52px; gap: 3px; }
      .cell { border-radius: 4px; display: flex; flex-direction: column; align-items: center;
              justify-content: center; font-size: 11px; cursor: pointer; opacity: 1; }
      .cell b { font-size: 17px; }
      .cell.dim { opacity: 0.18; }
      .alkali-metal { background: #b03a2e; } .alkaline-earth-metal { background: #ca6f1e; }
      .transition-metal { background: #7d6608; } .post-transition-metal { background: #1e8449; }
      .metalloid { background: #117a65; } .nonmetal { background: #1f618d; }
      .halogen { background: #6c3483; } .noble-gas { background: #884ea0; }
      .lanthanide { background: #5d6d7e; } .actinide { background: #4d5656; }
      #card { margin-top: 16px; white-space: pre-wrap; font-family: monospace; }
    </style>
  </head>
  <body>
    <div id="controls">
      <input id="query" placeholder="Search name, symbol, use..." />
      <select id="category"><option value="all">All categories</option></select>
      <select id="block"><option value="all">All blocks</option></select>
      <select id="level"><option value="all">All levels</option></select>
    </div>
    <div id="table"></div>
    <div id="card"></div>
    <script>
      const byZ = new Map();

      async function getJson(url) {
        const res = await fetch(url);
        return res.json();
      }

      function fillSelect(id, values) {
        const select = document.getElementById(id);
        for (const v of values) {
          const opt = document.createElement("option");
          opt.value = v;
          opt.textContent = v;
          select.appendChild(opt);
        }
      }

      async function drawGrid() {
        const grid = await getJson("/grid");
        const table = document.getElementById("table");
        for (const c of grid.cells) {
          const el = document.createElement("div");
          el.className = "cell " + c.category;
          el.style.gridRow = String(c.row + 1);
          el.style.gridColumn = String(c.col + 1);
          el.innerHTML = "<span>" + c.atomic_number + "</span><b>" + c.symbol + "</b>";
          el.title = c.name;
          el.onclick = () => showCard(c.atomic_number);
          byZ.set(c.atomic_number, el);
          table.appendChild(el);
        }
      }

      async function showCard(z) {
        const e = await getJson("/elements/" + z);
        const lines = [
          e.symbol + " (" + e.atomic_number + ") " + e.name,
          e.category + ", " + e.block + "-block, period " + e.period + ", group " + e.group,
          "configuration " + e.electron_configuration,
        ];
        if (e.uses.length) lines.push("uses: " + e.uses.join("; "));
        if (e.importance) lines.push(e.importance);
        document.getElementById("card").textContent = lines.join("\n");
      }

      async function refresh() {
        const params = new URLSearchParams();
        for (const id of ["query", "category", "block", "level"]) {
          params.set(id, document.getElementById(id).value);
        }
        const grid = await getJson("/grid?" + params.toString());
        if (!grid.cells) return;
        for (const c of grid.cells) {
          byZ.get(c.atomic_number)?.classList.toggle("dim", !c.matched);
        }
      }

      (async () => {
        const facets = await getJson("/elements/facets");
        fillSelect("category", facets.categories);
        fillSelect("block", facets.blocks);
        fillSelect("level", facets.levels);
        await drawGrid();
        for (const id of ["query", "category", "block", "level"]) {
          document.getElementById(id).addEventListener("input", refresh);
        }
      })();
    </script>
  </body>
</html>
"##;

async fn index() -> impl IntoResponse {
    Html(INDEX_HTML)
}

async fn elements(
    State(catalog): State<AppState>,
    Query(q): Query<ElementQuery>,
) -> Result<Response, ApiError> {
    let filter = q.filter()?;
    let combine = Combine::from_query(q.mode.as_deref());
    let hits = search_with(&catalog.elements, q.query.as_deref().unwrap_or(""), &filter, combine);
    let page = paginate(&hits, q.page.unwrap_or(1), q.per_page.unwrap_or(DEFAULT_PER_PAGE));
    Ok(Json(page).into_response())
}

async fn element(State(catalog): State<AppState>, Path(z): Path<String>) -> Result<Response, ApiError> {
    z.trim()
        .parse::<u8>()
        .ok()
        .and_then(|z| catalog.element(z))
        .map(|e| Json(e).into_response())
        .ok_or_else(|| ApiError::NotFound(format!("no element with atomic number `{z}`")))
}

async fn element_facets(State(catalog): State<AppState>) -> Json<ElementFacets> {
    Json(ElementFacets::of(&catalog.elements))
}

/// Occupied cells of the table, each flagged with whether it passes the
/// element query.
async fn grid(
    State(catalog): State<AppState>,
    Query(q): Query<ElementQuery>,
) -> Result<Response, ApiError> {
    let filter = q.filter()?;
    let combine = Combine::from_query(q.mode.as_deref());
    let matched: HashSet<u8> =
        search_with(&catalog.elements, q.query.as_deref().unwrap_or(""), &filter, combine)
            .into_iter()
            .map(|e| e.atomic_number)
            .collect();
    let grid = PeriodicGrid::build(&catalog.elements);
    let cells = grid
        .occupied()
        .map(|(pos, e)| GridCell {
            row: pos.row,
            col: pos.col,
            atomic_number: e.atomic_number,
            symbol: &e.symbol,
            name: &e.name,
            category: e.category,
            matched: matched.contains(&e.atomic_number),
        })
        .collect();
    Ok(Json(GridResponse {
        rows: GRID_ROWS,
        cols: GRID_COLS,
        cells,
    })
    .into_response())
}

async fn reactions(
    State(catalog): State<AppState>,
    Query(q): Query<ReactionQuery>,
) -> Result<Response, ApiError> {
    let filter = q.filter()?;
    let combine = Combine::from_query(q.mode.as_deref());
    let hits = search_with(&catalog.reactions, q.query.as_deref().unwrap_or(""), &filter, combine);
    let page = paginate(&hits, q.page.unwrap_or(1), q.per_page.unwrap_or(DEFAULT_PER_PAGE));
    Ok(Json(page).into_response())
}

async fn reaction_facets(State(catalog): State<AppState>) -> Json<ReactionFacets> {
    Json(ReactionFacets::of(&catalog.reactions))
}

async fn questions(
    State(catalog): State<AppState>,
    Query(q): Query<QuestionQuery>,
) -> Result<Response, ApiError> {
    let filter = q.filter()?;
    let combine = Combine::from_query(q.mode.as_deref());
    let hits = search_with(&catalog.questions, q.query.as_deref().unwrap_or(""), &filter, combine);
    let page = paginate(&hits, q.page.unwrap_or(1), q.per_page.unwrap_or(DEFAULT_PER_PAGE));
    Ok(Json(page).into_response())
}

async fn question_facets(State(catalog): State<AppState>) -> Json<QuestionFacets> {
    Json(QuestionFacets::of(&catalog.questions))
}

/// Deals a shuffled quiz from the matching questions. Answers are left out.
async fn quiz(
    State(catalog): State<AppState>,
    Query(q): Query<QuestionQuery>,
) -> Result<Response, ApiError> {
    let filter = q.filter()?;
    let combine = Combine::from_query(q.mode.as_deref());
    let pool: Vec<&Question> =
        search_with(&catalog.questions, q.query.as_deref().unwrap_or(""), &filter, combine);
    let seed = q.seed.unwrap_or_else(rand::random);
    let session = QuizSession::deal(&pool, seed, q.count.unwrap_or(DEFAULT_QUIZ_LENGTH));
    let cards: Vec<QuizCard> = session
        .questions()
        .iter()
        .map(|question| QuizCard {
            id: &question.id,
            prompt: &question.prompt,
            options: &question.options,
            time_limit: question.time_limit,
            marks: question.marks,
        })
        .collect();
    let total_marks: u32 = cards.iter().map(|c| c.marks).sum();
    Ok(Json(json!({
        "seed": seed,
        "total_time_limit": session.total_time_limit(),
        "total_marks": total_marks,
        "questions": cards,
    }))
    .into_response())
}

async fn paths(State(catalog): State<AppState>) -> Response {
    Json(&catalog.paths).into_response()
}

async fn path_progress(
    State(catalog): State<AppState>,
    Path(id): Path<String>,
    Query(q): Query<ProgressQuery>,
) -> Result<Response, ApiError> {
    let path = catalog
        .path(&id)
        .ok_or_else(|| ApiError::NotFound(format!("no learning path `{id}`")))?;
    let mut progress = PathProgress::new(path);
    let completed = q.completed.as_deref().unwrap_or("");
    for topic in completed.split(',').map(str::trim).filter(|t| !t.is_empty()) {
        progress.complete(topic)?;
    }
    Ok(Json(ProgressResponse {
        path: &path.id,
        percent_complete: progress.percent_complete(),
        topics: progress.topic_states(),
    })
    .into_response())
}

fn router(catalog: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/elements", get(elements))
        .route("/elements/facets", get(element_facets))
        .route("/elements/:z", get(element))
        .route("/grid", get(grid))
        .route("/reactions", get(reactions))
        .route("/reactions/facets", get(reaction_facets))
        .route("/questions", get(questions))
        .route("/questions/facets", get(question_facets))
        .route("/quiz", get(quiz))
        .route("/paths", get(paths))
        .route("/paths/:id/progress", get(path_progress))
        .with_state(catalog)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt::init();

    let config = Config::from_env()?;
    let catalog = bundle::load(&config.catalog, &config.cache_dir).await?;
    let app = router(catalog);

    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    info!(addr = %config.addr, "serving on http://{}", config.addr);
    axum::serve(listener, app).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> AppState {
        Arc::new(Catalog::builtin().clone())
    }

    #[test]
    fn test_element_query_filter() {
        let q = ElementQuery {
            category: Some("noble-gas".to_string()),
            period: Some("all".to_string()),
            ..Default::default()
        };
        let filter = q.filter().unwrap();
        assert_eq!(filter.category, Selection::Only(Category::NobleGas));
        assert!(filter.period.is_all());

        let bad = ElementQuery {
            group: Some("nineteen".to_string()),
            ..Default::default()
        };
        assert_eq!(bad.filter().err(), Some(SelectionError::new("group", "nineteen")));
    }

    #[tokio::test]
    async fn test_elements_status_codes() {
        let ok = elements(State(state()), Query(ElementQuery::default())).await;
        assert_eq!(ok.map(|r| r.status()).ok(), Some(StatusCode::OK));

        let bad = ElementQuery {
            block: Some("g".to_string()),
            ..Default::default()
        };
        let err = elements(State(state()), Query(bad)).await.err().unwrap();
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_grid_rejects_bad_filter() {
        let ok = grid(State(state()), Query(ElementQuery::default())).await;
        assert_eq!(ok.map(|r| r.status()).ok(), Some(StatusCode::OK));

        let bad = ElementQuery {
            state: Some("plasma".to_string()),
            ..Default::default()
        };
        let err = grid(State(state()), Query(bad)).await.err().unwrap();
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_unknown_element_is_404() {
        let found = element(State(state()), Path("8".to_string())).await;
        assert_eq!(found.map(|r| r.status()).ok(), Some(StatusCode::OK));

        for z in ["200", "300", "0", "iron"] {
            let missing = element(State(state()), Path(z.to_string())).await.err().unwrap();
            assert_eq!(missing.into_response().status(), StatusCode::NOT_FOUND, "{z}");
        }
    }

    #[tokio::test]
    async fn test_progress_errors() {
        let locked = ProgressQuery {
            completed: Some("bonding".to_string()),
        };
        let err = path_progress(State(state()), Path("foundations".to_string()), Query(locked))
            .await
            .err()
            .unwrap();
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);

        let err = path_progress(
            State(state()),
            Path("alchemy".to_string()),
            Query(ProgressQuery::default()),
        )
        .await
        .err()
        .unwrap();
        assert_eq!(err.into_response().status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_reaction_class_filter() {
        let q = ReactionQuery {
            class: Some("13".to_string()),
            ..Default::default()
        };
        let err = reactions(State(state()), Query(q)).await.err().unwrap();
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);

        let q = ReactionQuery {
            kind: Some("Synthesis".to_string()),
            ..Default::default()
        };
        let filter = q.filter().unwrap();
        assert_eq!(filter.kind, Selection::Only("Synthesis".to_string()));
    }
}
