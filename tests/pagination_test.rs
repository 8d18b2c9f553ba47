//! Pagination helper tests run against the public crate API, using a small
//! in-memory "directory listing" fixture instead of a real service.

use futures::StreamExt;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use tencentcloud_sdk_core::{paginate_fold, Paginator, Result, TCPagedResponse, TCPaginatedRequest};

#[derive(Clone)]
struct ListUsersRequest {
    offset: u64,
    limit: u64,
}

struct ListUsersResponse {
    users: Vec<String>,
    total_count: Option<u64>,
}

impl TCPaginatedRequest for ListUsersRequest {
    type Response = ListUsersResponse;

    fn make_next_request(&self, response: &ListUsersResponse) -> Option<Self> {
        let consumed = self.offset + response.users.len() as u64;
        let done = response.users.is_empty()
            || response.total_count.map(|total| consumed >= total).unwrap_or(true);
        if done {
            None
        } else {
            Some(ListUsersRequest {
                offset: consumed,
                limit: self.limit,
            })
        }
    }
}

impl TCPagedResponse for ListUsersResponse {
    type Item = String;
    fn items(&self) -> &[String] {
        &self.users
    }
    fn total_count(&self) -> Option<u64> {
        self.total_count
    }
}

fn directory(names: Vec<&str>) -> Arc<Vec<String>> {
    Arc::new(names.into_iter().map(String::from).collect())
}

fn fetcher(
    all: Arc<Vec<String>>,
) -> impl Fn(ListUsersRequest) -> Pin<Box<dyn Future<Output = Result<ListUsersResponse>> + Send>> + Clone
{
    move |req: ListUsersRequest| {
        let all = all.clone();
        Box::pin(async move {
            let start = req.offset as usize;
            let end = (start + req.limit as usize).min(all.len());
            let users = if start >= all.len() {
                Vec::new()
            } else {
                all[start..end].to_vec()
            };
            Ok(ListUsersResponse {
                users,
                total_count: Some(all.len() as u64),
            })
        })
    }
}

#[tokio::test]
async fn test_paginate_fold_collects_names_in_order() {
    let all = directory(vec!["alice", "bob", "carol", "dave", "erin"]);
    let request = ListUsersRequest { offset: 0, limit: 2 };

    let collected: Vec<String> = paginate_fold(request, fetcher(all), Vec::new(), |mut acc, response| {
        acc.extend(response.users.iter().cloned());
        (true, acc)
    })
    .await
    .unwrap();

    assert_eq!(collected, vec!["alice", "bob", "carol", "dave", "erin"]);
}

#[tokio::test]
async fn test_paginate_fold_on_empty_directory() {
    let all = directory(vec![]);
    let request = ListUsersRequest { offset: 0, limit: 5 };

    let collected: Vec<String> = paginate_fold(request, fetcher(all), Vec::new(), |mut acc, response| {
        acc.extend(response.users.iter().cloned());
        (true, acc)
    })
    .await
    .unwrap();

    assert!(collected.is_empty());
}

#[tokio::test]
async fn test_paginate_fold_stops_early_on_reduce_signal() {
    let all = directory(vec!["a", "b", "c", "d", "e", "f"]);
    let request = ListUsersRequest { offset: 0, limit: 2 };

    let collected: Vec<String> = paginate_fold(request, fetcher(all), Vec::new(), |mut acc, response| {
        acc.extend(response.users.iter().cloned());
        let keep_going = acc.len() < 3;
        (keep_going, acc)
    })
    .await
    .unwrap();

    assert_eq!(collected, vec!["a", "b", "c", "d"]);
}

#[tokio::test]
async fn test_paginator_stops_early_without_draining_every_page() {
    let all = directory(vec!["a", "b", "c", "d", "e", "f", "g", "h", "i", "j"]);
    let request = ListUsersRequest { offset: 0, limit: 3 };
    let paginator = Paginator::new(request, fetcher(all));

    let first_five: Vec<String> = paginator
        .items()
        .take(5)
        .map(|r| r.unwrap())
        .collect()
        .await;

    assert_eq!(first_five, vec!["a", "b", "c", "d", "e"]);
}

#[tokio::test]
async fn test_paginator_pages_preserve_page_boundaries() {
    let all = directory(vec!["a", "b", "c", "d", "e", "f", "g"]);
    let request = ListUsersRequest { offset: 0, limit: 3 };
    let paginator = Paginator::new(request, fetcher(all));

    let pages: Vec<_> = paginator.pages().collect().await;
    let lengths: Vec<usize> = pages.iter().map(|p| p.as_ref().unwrap().users.len()).collect();

    assert_eq!(lengths, vec![3, 3, 1]);
}

/// A token/marker-cursored API, the majority case among real TencentCloud
/// list operations: pagination works identically even though no field in
/// this request resembles an offset.
#[derive(Clone)]
struct ListJobsRequest {
    marker: Option<String>,
}

struct ListJobsResponse {
    job_ids: Vec<String>,
    next_marker: Option<String>,
}

impl TCPaginatedRequest for ListJobsRequest {
    type Response = ListJobsResponse;

    fn make_next_request(&self, response: &ListJobsResponse) -> Option<Self> {
        response.next_marker.clone().map(|marker| ListJobsRequest {
            marker: Some(marker),
        })
    }
}

impl TCPagedResponse for ListJobsResponse {
    type Item = String;
    fn items(&self) -> &[String] {
        &self.job_ids
    }
    fn total_count(&self) -> Option<u64> {
        None
    }
}

#[tokio::test]
async fn test_marker_cursored_api_paginates_without_a_total_count() {
    let batches = Arc::new(vec![
        vec!["job-1".to_string(), "job-2".to_string()],
        vec!["job-3".to_string()],
        vec!["job-4".to_string(), "job-5".to_string()],
    ]);
    let fetch = move |req: ListJobsRequest| {
        let batches = batches.clone();
        Box::pin(async move {
            let index: usize = req.marker.as_deref().unwrap_or("0").parse().unwrap();
            let job_ids = batches[index].clone();
            let next_marker = if index + 1 < batches.len() {
                Some((index + 1).to_string())
            } else {
                None
            };
            Ok(ListJobsResponse {
                job_ids,
                next_marker,
            })
        }) as Pin<Box<dyn Future<Output = Result<ListJobsResponse>> + Send>>
    };
    let request = ListJobsRequest { marker: None };

    let jobs: Vec<String> = paginate_fold(request, fetch, Vec::new(), |mut acc, response| {
        acc.extend(response.job_ids.iter().cloned());
        (true, acc)
    })
    .await
    .unwrap();

    assert_eq!(jobs, vec!["job-1", "job-2", "job-3", "job-4", "job-5"]);
}
