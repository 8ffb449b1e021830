//! CRUD clients for credit-deal records
//!
//! Documents, comments and the underwriter records expose the same
//! list/get/create/update/delete endpoints under different roots.
//! [`CrudResource`] describes one such family and [`CrudClient`] drives it.
//! Families whose `deal/{id}` endpoint returns a list also implement
//! [`DealListing`].

use std::marker::PhantomData;

use async_trait::async_trait;
use dealdesk_core::DocumentRepository;
use dealdesk_domain::{
    Comment, CommentPatch, Document, DocumentPatch, NewComment, NewDocument,
    Result as DomainResult,
};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::api::{encode_segment, ApiClient, ApiError, Operation};

/// Operations of one CRUD family, in endpoint order
#[derive(Debug, Clone, Copy)]
pub struct CrudOperations {
    pub list: Operation,
    pub get: Operation,
    pub list_by_assignment: Operation,
    pub create: Operation,
    pub update: Operation,
    pub delete: Operation,
}

/// A server-side record family with list/get/create/update/delete endpoints
pub trait CrudResource: Send + Sync + 'static {
    /// Stored record
    type Record: DeserializeOwned + Send;
    /// Create payload
    type Draft: Serialize + Send + Sync;
    /// Partial update payload
    type Patch: Serialize + Send + Sync;

    const ROOT: &'static str;
    const OPERATIONS: CrudOperations;
}

/// A family whose `deal/{id}` endpoint lists every record of the deal
pub trait DealListing: CrudResource {
    const LIST_BY_DEAL: Operation;
}

/// `/api/credit-deal-documents`
#[derive(Debug, Clone, Copy)]
pub struct CreditDocuments;

impl CrudResource for CreditDocuments {
    type Record = Document;
    type Draft = NewDocument;
    type Patch = DocumentPatch;

    const ROOT: &'static str = "/api/credit-deal-documents";
    const OPERATIONS: CrudOperations = CrudOperations {
        list: Operation::FetchDocuments,
        get: Operation::FetchDocument,
        list_by_assignment: Operation::FetchDocumentsByAssignment,
        create: Operation::CreateDocument,
        update: Operation::UpdateDocument,
        delete: Operation::DeleteDocument,
    };
}

/// `/api/credit-deal-comments`
#[derive(Debug, Clone, Copy)]
pub struct CreditComments;

impl CrudResource for CreditComments {
    type Record = Comment;
    type Draft = NewComment;
    type Patch = CommentPatch;

    const ROOT: &'static str = "/api/credit-deal-comments";
    const OPERATIONS: CrudOperations = CrudOperations {
        list: Operation::FetchComments,
        get: Operation::FetchComment,
        list_by_assignment: Operation::FetchCommentsByAssignment,
        create: Operation::CreateComment,
        update: Operation::UpdateComment,
        delete: Operation::DeleteComment,
    };
}

impl DealListing for CreditDocuments {
    const LIST_BY_DEAL: Operation = Operation::FetchDocumentsByDeal;
}

impl DealListing for CreditComments {
    const LIST_BY_DEAL: Operation = Operation::FetchCommentsByDeal;
}

pub type DocumentClient = CrudClient<CreditDocuments>;
pub type CommentClient = CrudClient<CreditComments>;

/// Client for one CRUD family
#[derive(Debug, Clone)]
pub struct CrudClient<R> {
    pub(crate) api: ApiClient,
    _resource: PhantomData<fn() -> R>,
}

impl<R: CrudResource> CrudClient<R> {
    pub fn new(api: ApiClient) -> Self {
        Self { api, _resource: PhantomData }
    }

    pub(crate) fn item_path(id: &str) -> String {
        format!("{}/{}", R::ROOT, encode_segment(id))
    }

    pub async fn list(&self) -> Result<Vec<R::Record>, ApiError> {
        self.api.get(R::OPERATIONS.list, R::ROOT).await
    }

    pub async fn get(&self, id: &str) -> Result<R::Record, ApiError> {
        self.api.get(R::OPERATIONS.get, &Self::item_path(id)).await
    }

    pub async fn list_by_assignment(
        &self,
        assignment_id: &str,
    ) -> Result<Vec<R::Record>, ApiError> {
        let path = format!("{}/assignment/{}", R::ROOT, encode_segment(assignment_id));
        self.api.get(R::OPERATIONS.list_by_assignment, &path).await
    }

    pub async fn create(&self, draft: &R::Draft) -> Result<R::Record, ApiError> {
        self.api.post(R::OPERATIONS.create, R::ROOT, draft).await
    }

    /// Send only the fields set on `patch`
    pub async fn update(&self, id: &str, patch: &R::Patch) -> Result<R::Record, ApiError> {
        self.api.put(R::OPERATIONS.update, &Self::item_path(id), patch).await
    }

    pub async fn delete(&self, id: &str) -> Result<(), ApiError> {
        self.api.delete(R::OPERATIONS.delete, &Self::item_path(id)).await
    }
}

impl<R: DealListing> CrudClient<R> {
    pub async fn list_by_deal(&self, deal_id: &str) -> Result<Vec<R::Record>, ApiError> {
        let path = format!("{}/deal/{}", R::ROOT, encode_segment(deal_id));
        self.api.get(R::LIST_BY_DEAL, &path).await
    }
}

#[async_trait]
impl DocumentRepository for CrudClient<CreditDocuments> {
    async fn list(&self) -> DomainResult<Vec<Document>> {
        Ok(CrudClient::list(self).await?)
    }

    async fn get(&self, document_id: &str) -> DomainResult<Document> {
        Ok(CrudClient::get(self, document_id).await?)
    }

    async fn list_by_deal(&self, deal_id: &str) -> DomainResult<Vec<Document>> {
        Ok(CrudClient::list_by_deal(self, deal_id).await?)
    }

    async fn list_by_assignment(&self, assignment_id: &str) -> DomainResult<Vec<Document>> {
        Ok(CrudClient::list_by_assignment(self, assignment_id).await?)
    }

    async fn create(&self, document: &NewDocument) -> DomainResult<Document> {
        Ok(CrudClient::create(self, document).await?)
    }

    async fn update(&self, document_id: &str, patch: &DocumentPatch) -> DomainResult<Document> {
        Ok(CrudClient::update(self, document_id, patch).await?)
    }

    async fn delete(&self, document_id: &str) -> DomainResult<()> {
        Ok(CrudClient::delete(self, document_id).await?)
    }
}
