//! Intermediate collection model shared by every output format.
//!
//! A [`Collection`] owns all of its [`Request`]s and its folder registry. Every list it
//! exposes (all requests, top-level requests, the members of each [`Folder`]) is kept in
//! policy order on every insertion, so it can be read at any time.

use crate::ordering::{self, SortKey};
use crate::source::HttpMethod;
use indexmap::IndexMap;
use log::debug;
use uuid::Uuid;

/// Current time in epoch milliseconds
fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// One exported request: a single method of a single route.
#[derive(Debug, Clone)]
pub struct Request {
    /// Run-unique identifier
    pub id: Uuid,
    /// Display name
    pub name: String,
    /// URL with template variables
    pub url: String,
    pub method: HttpMethod,
    /// Normalized documentation
    pub description: String,
    /// Creation time in epoch milliseconds
    pub time: i64,
    folder: Option<String>,
}

impl Request {
    pub fn new(name: impl Into<String>, url: impl Into<String>, method: HttpMethod) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            url: url.into(),
            method,
            description: String::new(),
            time: now_millis(),
            folder: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Name of the folder holding this request, if any
    pub fn folder(&self) -> Option<&str> {
        self.folder.as_deref()
    }

    pub fn sort_key(&self) -> SortKey<'_> {
        SortKey::new(&self.method, &self.name)
    }
}

/// A named group of requests sharing a namespace.
#[derive(Debug, Clone)]
pub struct Folder {
    /// Run-unique identifier
    pub id: Uuid,
    pub name: String,
    members: Vec<usize>,
}

impl Folder {
    fn new(name: &str) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.to_string(),
            members: Vec::new(),
        }
    }

    /// Number of requests in the folder
    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

/// Folder `name` of `folders`, created on first use
fn folder_entry<'a>(folders: &'a mut IndexMap<String, Folder>, name: &str) -> &'a mut Folder {
    folders.entry(name.to_string()).or_insert_with(|| {
        debug!("Creating folder: {}", name);
        Folder::new(name)
    })
}

/// Every request and folder produced by one export.
#[derive(Debug, Clone)]
pub struct Collection {
    /// Run-unique identifier
    pub id: Uuid,
    pub name: String,
    /// Creation time in epoch milliseconds
    pub timestamp: i64,
    /// Requests in creation order
    requests: Vec<Request>,
    /// Every request, ordered
    all: Vec<usize>,
    /// Requests outside any folder, ordered
    top_level: Vec<usize>,
    /// Folder registry, in first-encounter order
    folders: IndexMap<String, Folder>,
}

impl Collection {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            timestamp: now_millis(),
            requests: Vec::new(),
            all: Vec::new(),
            top_level: Vec::new(),
            folders: IndexMap::new(),
        }
    }

    /// Returns the folder called `name`, creating it on first use.
    pub fn get_folder(&mut self, name: &str) -> &Folder {
        folder_entry(&mut self.folders, name)
    }

    /// Looks a folder up without creating it
    pub fn find_folder(&self, name: &str) -> Option<&Folder> {
        self.folders.get(name)
    }

    /// Adds `request` at the top level, or to the folder `folder` (created if needed).
    pub fn add_request(&mut self, mut request: Request, folder: Option<&str>) {
        let index = self.requests.len();
        request.folder = folder.map(str::to_string);
        self.requests.push(request);

        let requests = &self.requests;
        let key = |&i: &usize| requests[i].sort_key();
        ordering::insert_sorted(&mut self.all, index, key);
        let list = match folder {
            Some(name) => &mut folder_entry(&mut self.folders, name).members,
            None => &mut self.top_level,
        };
        ordering::insert_sorted(list, index, key);
    }

    /// Every request, ordered
    pub fn requests(&self) -> impl Iterator<Item = &Request> + '_ {
        self.all.iter().map(move |&i| &self.requests[i])
    }

    /// Requests outside any folder, ordered
    pub fn top_level_requests(&self) -> impl Iterator<Item = &Request> + '_ {
        self.top_level.iter().map(move |&i| &self.requests[i])
    }

    /// Folders in first-encounter order
    pub fn folders(&self) -> impl Iterator<Item = &Folder> + '_ {
        self.folders.values()
    }

    /// Members of `folder`, ordered
    pub fn folder_requests<'a>(&'a self, folder: &'a Folder) -> impl Iterator<Item = &'a Request> + 'a {
        folder.members.iter().map(move |&i| &self.requests[i])
    }

    pub fn request_count(&self) -> usize {
        self.requests.len()
    }

    pub fn folder_count(&self) -> usize {
        self.folders.len()
    }
}
