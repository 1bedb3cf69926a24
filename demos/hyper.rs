use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use http_body_util::Full;
use hyper::body::{Bytes, Incoming};
use hyper::server::conn::http1::Builder as ConnectionBuilder;
use hyper::{Method, Request, Response, StatusCode};
use hyper_util::rt::TokioIo;
use routrie::{Params, Tree};
use tokio::net::TcpListener;
use tower::service_fn;
use tower::util::BoxCloneService;
use tower::Service as _;

type Body = Full<Bytes>;

fn body(text: &str) -> Body {
    Full::new(Bytes::copy_from_slice(text.as_bytes()))
}

// GET /
async fn index(_req: Request<Incoming>) -> hyper::Result<Response<Body>> {
    Ok(Response::new(body("Hello, world!")))
}

// GET /hello/:name
async fn hello(req: Request<Incoming>) -> hyper::Result<Response<Body>> {
    let name = req
        .extensions()
        .get::<Params>()
        .and_then(|params| params.get("name").map(str::to_owned))
        .unwrap_or_else(|| "stranger".to_owned());
    Ok(Response::new(body(&format!("Hello, {name}!"))))
}

// GET /files/*path
async fn files(req: Request<Incoming>) -> hyper::Result<Response<Body>> {
    let path = req
        .extensions()
        .get::<Params>()
        .and_then(|params| params.get("path").map(str::to_owned))
        .unwrap_or_default();
    Ok(Response::new(body(&format!("You asked for '{path}'"))))
}

// 404 handler
async fn not_found(_req: Request<Incoming>) -> hyper::Result<Response<Body>> {
    Ok(Response::builder()
        .status(StatusCode::NOT_FOUND)
        .body(body("not found"))
        .unwrap())
}

// `BoxCloneService` erases each handler's type. The `Mutex` is there
// because `BoxCloneService` is not `Sync`.
type Handler = Mutex<BoxCloneService<Request<Incoming>, Response<Body>, hyper::Error>>;

// One tree per HTTP method, built once at startup; afterwards the
// trees are only read, so they can be shared freely.
type Router = HashMap<Method, Tree<Handler>>;

async fn route(router: Arc<Router>, mut req: Request<Incoming>) -> hyper::Result<Response<Body>> {
    let tree = match router.get(req.method()) {
        Some(tree) => tree,
        // no routes for this method at all
        None => {
            return Ok(Response::builder()
                .status(StatusCode::METHOD_NOT_ALLOWED)
                .body(body(""))
                .unwrap())
        }
    };

    let lookup = tree.find(req.uri().path());
    match lookup.payload() {
        Some(handler) => {
            // lock the handler for a very short time, just to clone it
            let mut service = handler.lock().unwrap().clone();
            // captured parameters travel to the handler as an extension
            req.extensions_mut().insert(lookup.params().clone());
            service.call(req).await
        }
        None => not_found(req).await,
    }
}

fn handler<F, R>(f: F) -> Handler
where
    F: FnMut(Request<Incoming>) -> R,
    F: Clone + Send + 'static,
    R: std::future::Future<Output = hyper::Result<Response<Body>>> + Send + 'static,
{
    Mutex::new(BoxCloneService::new(service_fn(f)))
}

#[tokio::main]
async fn main() {
    let mut get = Tree::new();
    get.add("/", handler(index)).unwrap();
    get.add("/hello/:name", handler(hello)).unwrap();
    get.add("/files/*path", handler(files)).unwrap();

    let mut router = Router::new();
    router.insert(Method::GET, get);
    let router = Arc::new(router);

    let listener = TcpListener::bind(("127.0.0.1", 3000)).await.unwrap();
    println!("listening on http://127.0.0.1:3000");

    loop {
        let router = router.clone();
        let (tcp, _) = listener.accept().await.unwrap();
        tokio::task::spawn(async move {
            if let Err(err) = ConnectionBuilder::new()
                .serve_connection(
                    TokioIo::new(tcp),
                    hyper::service::service_fn(|request| route(router.clone(), request)),
                )
                .await
            {
                println!("Error serving connection: {:?}", err);
            }
        });
    }
}
