//! Startup data loading: one attempt at the primary document, then one at the fallback.

use std::future::Future;

use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

use crate::config::{FALLBACK_DATA_URL, PRIMARY_DATA_URL};
use crate::error::LoadError;
use crate::model::PortfolioData;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DataSource {
    Primary,
    Fallback,
}

#[derive(Debug)]
pub struct LoadedPortfolio {
    pub data: PortfolioData,
    pub source: DataSource,
}

/// Resolve the portfolio document using `fetch` for each resource.
/// The fallback is requested only when the primary fails.
pub async fn load_portfolio<F, Fut>(fetch: F) -> Result<LoadedPortfolio, LoadError>
where
    F: Fn(&'static str) -> Fut,
    Fut: Future<Output = Result<PortfolioData, LoadError>>,
{
    let primary = match fetch(PRIMARY_DATA_URL).await {
        Ok(data) => {
            log::info!("loaded portfolio data from {PRIMARY_DATA_URL}");
            return Ok(LoadedPortfolio { data, source: DataSource::Primary });
        }
        Err(err) => err,
    };
    log::warn!("{PRIMARY_DATA_URL} unavailable, using template data: {primary}");

    match fetch(FALLBACK_DATA_URL).await {
        Ok(data) => {
            log::info!("loaded template data from {FALLBACK_DATA_URL}");
            Ok(LoadedPortfolio { data, source: DataSource::Fallback })
        }
        Err(fallback) => Err(LoadError::Exhausted {
            primary: Box::new(primary),
            fallback: Box::new(fallback),
        }),
    }
}

/// Fetch and parse one JSON document from the page's origin.
pub async fn fetch_portfolio(url: &'static str) -> Result<PortfolioData, LoadError> {
    let window =
        web_sys::window().ok_or_else(|| LoadError::Unavailable("no global window".into()))?;

    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::SameOrigin);
    let request = Request::new_with_str_and_init(url, &opts)
        .map_err(|e| LoadError::Unavailable(format!("{e:?}")))?;

    let response: Response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .and_then(|v| v.dyn_into::<Response>())
        .map_err(|e| LoadError::Network { url: url.to_string(), reason: format!("{e:?}") })?;
    if !response.ok() {
        return Err(LoadError::Status { url: url.to_string(), status: response.status() });
    }

    let body_err = |e: wasm_bindgen::JsValue| LoadError::Body {
        url: url.to_string(),
        reason: format!("{e:?}"),
    };
    let text = JsFuture::from(response.text().map_err(body_err)?)
        .await
        .map_err(body_err)?
        .as_string()
        .ok_or_else(|| LoadError::Body { url: url.to_string(), reason: "not text".into() })?;

    serde_json::from_str(&text).map_err(|source| LoadError::Parse { url: url.to_string(), source })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::future::ready;
    use std::pin::pin;
    use std::task::{Context, Poll, Waker};

    fn block_on<F: Future>(fut: F) -> F::Output {
        let mut fut = pin!(fut);
        let mut cx = Context::from_waker(Waker::noop());
        match fut.as_mut().poll(&mut cx) {
            Poll::Ready(v) => v,
            Poll::Pending => panic!("ready futures never pend"),
        }
    }

    fn doc(name: &str) -> PortfolioData {
        serde_json::from_str(&format!(r#"{{ "personalInfo": {{ "name": "{name}" }} }}"#)).unwrap()
    }

    fn status(url: &str) -> LoadError {
        LoadError::Status { url: url.to_string(), status: 404 }
    }

    #[test]
    fn primary_success_never_touches_fallback() {
        let calls = RefCell::new(Vec::new());
        let loaded = block_on(load_portfolio(|url| {
            calls.borrow_mut().push(url);
            ready(Ok(doc("primary")))
        }))
        .unwrap();
        assert_eq!(loaded.source, DataSource::Primary);
        assert_eq!(loaded.data.personal_info.unwrap().name, "primary");
        assert_eq!(*calls.borrow(), [PRIMARY_DATA_URL]);
    }

    #[test]
    fn primary_failure_uses_fallback() {
        let calls = RefCell::new(Vec::new());
        let loaded = block_on(load_portfolio(|url| {
            calls.borrow_mut().push(url);
            ready(if url == PRIMARY_DATA_URL { Err(status(url)) } else { Ok(doc("template")) })
        }))
        .unwrap();
        assert_eq!(loaded.source, DataSource::Fallback);
        assert_eq!(loaded.data.personal_info.unwrap().name, "template");
        assert_eq!(*calls.borrow(), [PRIMARY_DATA_URL, FALLBACK_DATA_URL]);
    }

    #[test]
    fn both_failures_report_each_cause() {
        let calls = RefCell::new(0);
        let err = block_on(load_portfolio(|url| {
            *calls.borrow_mut() += 1;
            ready(Err(status(url)))
        }))
        .unwrap_err();
        assert_eq!(*calls.borrow(), 2);
        match err {
            LoadError::Exhausted { primary, fallback } => {
                assert!(matches!(*primary, LoadError::Status { ref url, .. } if url == PRIMARY_DATA_URL));
                assert!(matches!(*fallback, LoadError::Status { ref url, .. } if url == FALLBACK_DATA_URL));
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
