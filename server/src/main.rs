use axum::Json;
use axum::{
    extract::Path,
    http::{HeaderValue, Method},
    response::Html,
    routing::get,
    Router,
};
use serde::Serialize;
use tower_http::cors::CorsLayer;

use kociemba::facelet::SOLVED_FACE_CUBE;
use kociemba::scramble::{gen_scramble, scramble_to_str};
use kociemba::solver::{self, SolveStatus};

#[tokio::main]
async fn main() {
    let cors = CorsLayer::new()
        .allow_origin("http://127.0.0.1:8080".parse::<HeaderValue>().unwrap())
        .allow_methods([Method::GET]);
    let app = Router::new()
        .route("/", get(index))
        .route("/solve/:facelet", get(solve))
        .route("/scramble", get(scramble))
        .layer(cors);

    let app = app.fallback(index);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:32125")
        .await
        .unwrap();
    println!("listening on http://{}", listener.local_addr().unwrap());
    axum::serve(listener, app).await.unwrap();
}

async fn index() -> Html<&'static str> {
    Html("<p>Solve a cube: http://localhost:32125/solve/<Facelet String></p>
    Example: <a href=\"http://localhost:32125/solve/DUUBULDBFRBFRRULLLBRDFFFBLURDBFDFDRFRULBLUFDURRBLBDUDL\">http://localhost:32125/solve/DUUBULDBFRBFRRULLLBRDFFFBLURDBFDFDRFRULBLUFDURRBLBDUDL</a>
    <p>Get a scramble: <a href=\"http://localhost:32125/scramble\">http://localhost:32125/scramble</a></p>")
}

async fn scramble() -> String {
    let ss = gen_scramble(25);
    format!("Scramble: {}", scramble_to_str(&ss))
}

/// The wire response for `/solve/:facelet`: the status code of §6's
/// interface table, plus the move-name sequence on success.
#[derive(Serialize)]
struct SolveResponse {
    status: SolveStatus,
    moves: Vec<String>,
}

impl From<solver::SolveResult> for SolveResponse {
    fn from(r: solver::SolveResult) -> Self {
        SolveResponse {
            status: r.status,
            moves: r.moves.iter().map(ToString::to_string).collect(),
        }
    }
}

async fn solve(Path(facelet): Path<String>) -> Json<SolveResponse> {
    let result = solver::solve(&facelet, &SOLVED_FACE_CUBE.to_string(), 23, false);
    Json(result.into())
}
