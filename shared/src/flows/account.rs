//! 账户页面流程：资料编辑、头像上传、登出

use serde::{Deserialize, Serialize};

use super::Effect;
use crate::client::{ImageUpload, PpobApi};
use crate::forms::{FieldErrors, ProfileForm};
use crate::request::HttpClient;
use crate::route::AppRoute;
use crate::{MAX_PROFILE_IMAGE_BYTES, Profile};

pub const PROFILE_UPDATED: &str = "Profile updated successfully!";
pub const PROFILE_UPDATE_FAILED: &str = "Failed to update profile.";
pub const PROFILE_IMAGE_FAILED: &str = "Failed to update profile image.";
pub const PROFILE_IMAGE_TOO_LARGE: &str = "File size exceeds 100KB";

/// 上传前的大小检查
pub fn check_image_size(size: u64) -> Result<(), Effect> {
    if size > MAX_PROFILE_IMAGE_BYTES {
        log::warn!("rejecting profile image of {} bytes", size);
        return Err(Effect::Alert(PROFILE_IMAGE_TOO_LARGE.to_string()));
    }
    Ok(())
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountFlow {
    editing: bool,
    draft: ProfileForm,
    errors: FieldErrors,
    saving: bool,
    uploading: bool,
}

impl AccountFlow {
    pub fn is_editing(&self) -> bool {
        self.editing
    }

    pub fn draft(&self) -> &ProfileForm {
        &self.draft
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn is_saving(&self) -> bool {
        self.saving
    }

    pub fn is_uploading(&self) -> bool {
        self.uploading
    }

    /// 「Edit Profil」，草稿从当前资料复制
    pub fn start_edit(&mut self, profile: &Profile) {
        self.editing = true;
        self.errors = FieldErrors::default();
        self.draft = ProfileForm {
            first_name: profile.first_name.clone(),
            last_name: profile.last_name.clone(),
        };
    }

    pub fn cancel_edit(&mut self) {
        self.editing = false;
        self.errors = FieldErrors::default();
    }

    pub fn set_first_name(&mut self, value: &str) {
        self.draft.first_name = value.to_string();
    }

    pub fn set_last_name(&mut self, value: &str) {
        self.draft.last_name = value.to_string();
    }

    /// 「Simpan」，校验不通过时返回 `None` 并记录字段错误
    pub fn begin_save(&mut self) -> Option<ProfileForm> {
        if !self.editing || self.saving {
            return None;
        }
        if let Err(errors) = self.draft.check() {
            self.errors = errors;
            return None;
        }
        self.errors = FieldErrors::default();
        self.saving = true;
        Some(self.draft.clone())
    }

    pub fn finish_save(&mut self, succeeded: bool) -> Vec<Effect> {
        self.saving = false;
        if succeeded {
            self.editing = false;
            vec![
                Effect::Alert(PROFILE_UPDATED.to_string()),
                Effect::FetchProfile,
            ]
        } else {
            vec![Effect::Alert(PROFILE_UPDATE_FAILED.to_string())]
        }
    }

    /// 选中文件后调用，超过大小限制时直接弹窗，不发请求
    pub fn begin_upload(&mut self, size: u64) -> Result<(), Effect> {
        check_image_size(size)?;
        self.uploading = true;
        Ok(())
    }

    /// 上传结束，结果由 [`upload_image`] 转成副作用
    pub fn finish_upload(&mut self) {
        self.uploading = false;
    }

    pub fn logout(&mut self) -> Vec<Effect> {
        *self = Self::default();
        vec![Effect::Logout, Effect::Navigate(AppRoute::Login)]
    }
}

/// `PUT /profile/update`
pub async fn save_profile<C: HttpClient>(api: &PpobApi<C>, form: &ProfileForm) -> bool {
    match api
        .update_profile(form.first_name.trim(), form.last_name.trim())
        .await
    {
        Ok(_) => true,
        Err(e) => {
            log::error!("update profile failed: {}", e);
            false
        }
    }
}

/// `PUT /profile/image`，同样先做大小检查
pub async fn upload_image<C: HttpClient>(api: &PpobApi<C>, upload: ImageUpload) -> Vec<Effect> {
    if let Err(alert) = check_image_size(upload.bytes.len() as u64) {
        return vec![alert];
    }
    match api.update_profile_image(upload).await {
        Ok(_) => vec![Effect::FetchProfile],
        Err(e) => {
            log::error!("update profile image failed: {}", e);
            vec![Effect::Alert(PROFILE_IMAGE_FAILED.to_string())]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::{HttpBody, HttpMethod, MockHttpClient};
    use serde_json::json;

    fn profile() -> Profile {
        Profile {
            email: "user@nutech.id".to_string(),
            first_name: "User".to_string(),
            last_name: "Nutech".to_string(),
            profile_image: None,
        }
    }

    fn api(client: MockHttpClient) -> PpobApi<MockHttpClient> {
        PpobApi::new("https://api.test", client).with_token(Some("t".to_string()))
    }

    #[test]
    fn test_edit_copies_profile_into_draft() {
        let mut flow = AccountFlow::default();
        flow.start_edit(&profile());
        assert!(flow.is_editing());
        assert_eq!(flow.draft().first_name, "User");

        flow.set_last_name("Baru");
        flow.cancel_edit();
        assert!(!flow.is_editing());
    }

    #[test]
    fn test_save_requires_both_names() {
        let mut flow = AccountFlow::default();
        flow.start_edit(&profile());
        flow.set_first_name("  ");
        assert_eq!(flow.begin_save(), None);
        assert_eq!(flow.errors().get("first_name"), Some("Nama depan wajib diisi"));
        assert!(!flow.is_saving());
    }

    #[test]
    fn test_save_results() {
        let mut flow = AccountFlow::default();
        flow.start_edit(&profile());
        assert!(flow.begin_save().is_some());
        assert!(flow.begin_save().is_none());

        assert_eq!(
            flow.finish_save(false),
            vec![Effect::Alert("Failed to update profile.".to_string())]
        );
        assert!(flow.is_editing());

        flow.begin_save();
        assert_eq!(
            flow.finish_save(true),
            vec![
                Effect::Alert("Profile updated successfully!".to_string()),
                Effect::FetchProfile
            ]
        );
        assert!(!flow.is_editing());
    }

    #[test]
    fn test_image_size_limit_is_inclusive() {
        assert!(check_image_size(100 * 1024).is_ok());
        assert_eq!(
            check_image_size(100 * 1024 + 1),
            Err(Effect::Alert("File size exceeds 100KB".to_string()))
        );
    }

    #[test]
    fn test_upload_flag() {
        let mut flow = AccountFlow::default();
        assert!(flow.begin_upload(512).is_ok());
        assert!(flow.is_uploading());
        flow.finish_upload();
        assert!(!flow.is_uploading());
    }

    #[test]
    fn test_logout_clears_session_and_goes_to_login() {
        let mut flow = AccountFlow::default();
        flow.start_edit(&profile());
        assert_eq!(
            flow.logout(),
            vec![Effect::Logout, Effect::Navigate(AppRoute::Login)]
        );
        assert!(!flow.is_editing());
    }

    #[tokio::test]
    async fn test_save_profile_sends_trimmed_names() {
        let client = MockHttpClient::new();
        client.mock_response(
            HttpMethod::Put,
            "https://api.test/profile/update",
            200,
            json!({"status": 0, "message": "Update Pofile berhasil", "data": {
                "email": "user@nutech.id",
                "first_name": "Baru",
                "last_name": "Nutech",
                "profile_image": null
            }}),
        );
        let api = api(client);
        let form = ProfileForm {
            first_name: " Baru ".to_string(),
            last_name: "Nutech".to_string(),
        };
        assert!(save_profile(&api, &form).await);
    }

    #[tokio::test]
    async fn test_upload_image_success_refetches_profile() {
        let client = MockHttpClient::new();
        client.mock_response(
            HttpMethod::Put,
            "https://api.test/profile/image",
            200,
            json!({"status": 0, "message": "Update Profile Image berhasil", "data": {
                "email": "user@nutech.id",
                "first_name": "User",
                "last_name": "Nutech",
                "profile_image": "https://cdn.test/avatar.png"
            }}),
        );
        let api = api(client);
        let upload = ImageUpload {
            file_name: "avatar.png".to_string(),
            bytes: vec![0u8; 2048],
        };

        assert_eq!(upload_image(&api, upload).await, vec![Effect::FetchProfile]);
    }

    #[tokio::test]
    async fn test_upload_image_failure_alerts() {
        let client = MockHttpClient::new();
        client.mock_response(
            HttpMethod::Put,
            "https://api.test/profile/image",
            400,
            json!({"status": 102, "message": "Format Image tidak sesuai", "data": null}),
        );
        let api = api(client);
        let upload = ImageUpload {
            file_name: "avatar.jpg".to_string(),
            bytes: vec![1u8; 10],
        };

        let effects = upload_image(&api, upload).await;
        assert_eq!(
            effects,
            vec![Effect::Alert("Failed to update profile image.".to_string())]
        );
        let requests = api_requests(&api);
        assert!(matches!(requests[0], Some(HttpBody::Multipart(_))));
    }

    fn api_requests(api: &PpobApi<MockHttpClient>) -> Vec<Option<HttpBody>> {
        api.client()
            .requests
            .borrow()
            .iter()
            .map(|(_, _, _, body)| body.clone())
            .collect()
    }
}
