//! Cursor-agnostic pagination helpers shared by every generated list operation.
//!
//! A paginated request decides for itself what its next page looks like by
//! inspecting the previous response — an offset/limit scheme advances a
//! counter, a token/marker scheme copies the next cursor out of the
//! response, and a request with no more pages returns `None`. The helpers
//! here never touch offsets or tokens directly, so the same [`paginate_fold`]
//! and [`Paginator`] serve any of those schemes.
//!
//! [`paginate_fold`] drives a single synchronous accumulation over every
//! page, with an early-stop signal the reducer controls; [`Paginator`]
//! exposes the same traversal as a lazy [`Stream`], one page or one item at
//! a time, for callers who want to stop early without plumbing that signal
//! through a closure.

use crate::error::{PaginationErrorKind, Result, TencentCloudError};
use async_stream::try_stream;
use futures_core::Stream;
use std::future::Future;
use std::marker::PhantomData;

/// A request DTO that can be paged. Generated request types implement this
/// to describe how to build the next page's request from the previous
/// page's response — the scheme (offset, token, marker) is entirely up to
/// the implementor.
pub trait TCPaginatedRequest: Clone + Send {
    /// The response type this request's pages come back as.
    type Response: TCPagedResponse;

    /// Build the request for the next page, given the response to this
    /// one. Returns `None` when `response` was the last page.
    fn make_next_request(&self, response: &Self::Response) -> Option<Self>;
}

/// A response DTO that carries one page of a paginated collection.
pub trait TCPagedResponse: Send {
    /// The element type of the collection being paged.
    type Item: Clone + Send;
    /// The items present in this page.
    fn items(&self) -> &[Self::Item];
    /// The total number of items across every page, as reported by the
    /// server on this particular call. `None` when the API exposes no
    /// total-count field at all, in which case
    /// [`PaginationErrorKind::TotalCountChanged`] can never be raised.
    fn total_count(&self) -> Option<u64>;
}

fn check_total(expected_total: &mut Option<u64>, response_total: Option<u64>) -> Result<()> {
    if let Some(total) = response_total {
        if let Some(expected) = *expected_total {
            if expected != total {
                return Err(PaginationErrorKind::TotalCountChanged.into());
            }
        } else {
            *expected_total = Some(total);
        }
    }
    Ok(())
}

/// Walk every page of a paginated collection, reducing each response into
/// `acc`. `reduce` returns `(keep_going, acc)`; returning `false` stops the
/// walk before requesting the next page, even if one would exist.
///
/// Returns [`PaginationErrorKind::TotalCountChanged`] if a server-reported
/// total changes between two calls, since that means the underlying
/// collection was mutated mid-traversal and the fold can no longer be
/// trusted to be complete. An API whose responses never report a total
/// (`total_count` returns `None`) never triggers this check.
pub async fn paginate_fold<Req, Acc, Fetch, Fut, Reduce>(
    mut request: Req,
    fetch: Fetch,
    init: Acc,
    mut reduce: Reduce,
) -> Result<Acc>
where
    Req: TCPaginatedRequest,
    Fetch: Fn(Req) -> Fut,
    Fut: Future<Output = Result<Req::Response>>,
    Reduce: FnMut(Acc, &Req::Response) -> (bool, Acc),
{
    let mut acc = init;
    let mut expected_total: Option<u64> = None;

    loop {
        let response = fetch(request.clone()).await?;
        check_total(&mut expected_total, response.total_count())?;

        let (keep_going, next_acc) = reduce(acc, &response);
        acc = next_acc;
        if !keep_going {
            break;
        }

        match request.make_next_request(&response) {
            Some(next) => request = next,
            None => break,
        }
    }

    Ok(acc)
}

/// Lazy page-by-page (or item-by-item) traversal of a paginated collection.
pub struct Paginator<Req, Fetch, Fut>
where
    Req: TCPaginatedRequest,
    Fetch: Fn(Req) -> Fut,
    Fut: Future<Output = Result<Req::Response>>,
{
    request: Req,
    fetch: Fetch,
    _marker: PhantomData<fn() -> Fut>,
}

impl<Req, Fetch, Fut> Paginator<Req, Fetch, Fut>
where
    Req: TCPaginatedRequest + 'static,
    Fetch: Fn(Req) -> Fut + 'static,
    Fut: Future<Output = Result<Req::Response>> + 'static,
{
    /// Build a paginator starting from `request`, calling `fetch` to
    /// resolve each page and `Req::make_next_request` to decide whether
    /// there is a next one.
    pub fn new(request: Req, fetch: Fetch) -> Self {
        Self {
            request,
            fetch,
            _marker: PhantomData,
        }
    }

    /// Stream of pages, in order. Stops (without erroring) once
    /// `make_next_request` returns `None`.
    pub fn pages(self) -> impl Stream<Item = Result<Req::Response>> {
        try_stream! {
            let Paginator { mut request, fetch, .. } = self;
            let mut expected_total: Option<u64> = None;
            let mut seq: u64 = 0;

            loop {
                let response = fetch(request.clone()).await?;
                check_total(&mut expected_total, response.total_count())
                    .map_err(TencentCloudError::from)?;
                seq += 1;
                log::debug!("tc-client-pagination-seq={}", seq);

                let next = request.make_next_request(&response);
                yield response;
                match next {
                    Some(next_request) => request = next_request,
                    None => break,
                }
            }
        }
    }

    /// Stream of individual items, flattened across pages.
    pub fn items(self) -> impl Stream<Item = Result<<Req::Response as TCPagedResponse>::Item>> {
        try_stream! {
            for await page in self.pages() {
                let page = page?;
                for item in page.items() {
                    yield item.clone();
                }
            }
        }
    }
}
