use reqwest::Method;
use serde::Serialize;

use crate::{
    types::{AccessLevel, AccessList, ObjectType, PermissionObject, PermissionSubject, Subject},
    Client, Error,
};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ListObjectsBody<'a> {
    subject: &'a PermissionSubject,
    object_type: ObjectType,
}

#[derive(Serialize)]
struct ChangeBody<'a> {
    subject: &'a PermissionSubject,
    object: &'a PermissionObject,
    #[serde(skip_serializing_if = "Option::is_none")]
    access_level: Option<AccessLevel>,
}

/// Permission endpoints. Reads need the "Permissions > Read" scope, grants and
/// revocations "Permissions > Write".
impl Client {
    /// Everyone with access to a folder or app, and why.
    pub async fn get_access_list(
        &self,
        object_type: ObjectType,
        object_id: &str,
    ) -> Result<Option<AccessList>, Error> {
        let url = self.endpoint_url(&["permissions", "accessList", object_type.as_str(), object_id])?;
        self.request_single::<_, ()>(Method::GET, url, None).await
    }

    /// Lists the objects of `object_type` that `subject` can access.
    pub async fn list_object_permissions(
        &self,
        subject: &PermissionSubject,
        object_type: ObjectType,
    ) -> Result<Vec<Subject>, Error> {
        let url = self.endpoint_url(&["permissions", "listObjects"])?;
        let body = ListObjectsBody {
            subject,
            object_type,
        };
        self.request_collection_with(Method::POST, url, Some(&body)).await
    }

    /// Grants `subject` `access_level` on `object`, returning the resulting grants.
    pub async fn grant_permission(
        &self,
        subject: &PermissionSubject,
        object: &PermissionObject,
        access_level: AccessLevel,
    ) -> Result<Vec<Subject>, Error> {
        let url = self.endpoint_url(&["permissions", "grant"])?;
        let body = ChangeBody {
            subject,
            object,
            access_level: Some(access_level),
        };
        self.request_collection_with(Method::POST, url, Some(&body)).await
    }

    /// Revokes whatever access `subject` has on `object`.
    pub async fn revoke_permission(
        &self,
        subject: &PermissionSubject,
        object: &PermissionObject,
    ) -> Result<Vec<Subject>, Error> {
        let url = self.endpoint_url(&["permissions", "revoke"])?;
        let body = ChangeBody {
            subject,
            object,
            access_level: None,
        };
        self.request_collection_with(Method::POST, url, Some(&body)).await
    }
}
