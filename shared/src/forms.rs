//! 表单校验
//!
//! 登录、注册、资料编辑三个表单的 schema，使用 `validator` 派生。
//! 校验失败时不会发出任何网络请求，错误按字段展示。

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError, ValidationErrors};

use crate::protocol::RegistrationRequest;

const REQUIRED_CODE: &str = "required";

/// 必填校验：去掉首尾空白后不能为空
fn required(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new(REQUIRED_CODE));
    }
    Ok(())
}

/// 每个字段只保留一条错误信息
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldErrors(BTreeMap<String, String>);

impl FieldErrors {
    /// 同一字段有多条错误时优先展示「必填」
    fn from_validation(errors: &ValidationErrors, required_messages: &[(&str, &str)]) -> Self {
        let mut map = BTreeMap::new();
        for (field, errs) in errors.field_errors() {
            let field = field.to_string();
            let message = if errs.iter().any(|e| e.code == REQUIRED_CODE) {
                required_messages
                    .iter()
                    .find(|(name, _)| *name == field)
                    .map(|(_, msg)| msg.to_string())
            } else {
                None
            };
            let message = message.or_else(|| {
                errs.iter()
                    .find_map(|e| e.message.as_ref().map(|m| m.to_string()))
            });
            map.insert(field, message.unwrap_or_else(|| "Input tidak valid".to_string()));
        }
        Self(map)
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}

// =========================================================
// 登录
// =========================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct LoginForm {
    #[validate(
        custom(function = "required"),
        email(message = "Format email tidak valid")
    )]
    pub email: String,
    #[validate(
        custom(function = "required"),
        length(min = 8, message = "Password minimal 8 karakter")
    )]
    pub password: String,
}

impl LoginForm {
    pub fn check(&self) -> Result<(), FieldErrors> {
        self.validate().map_err(|e| {
            FieldErrors::from_validation(
                &e,
                &[
                    ("email", "Email wajib diisi"),
                    ("password", "Password wajib diisi"),
                ],
            )
        })
    }
}

// =========================================================
// 注册
// =========================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct RegisterForm {
    #[validate(
        custom(function = "required"),
        email(message = "Format email tidak valid")
    )]
    pub email: String,
    #[validate(custom(function = "required"))]
    pub first_name: String,
    #[validate(custom(function = "required"))]
    pub last_name: String,
    #[validate(
        custom(function = "required"),
        length(min = 6, message = "Password minimal 6 karakter")
    )]
    pub password: String,
    #[validate(
        custom(function = "required"),
        must_match(other = "password", message = "Password tidak sama")
    )]
    pub confirm_password: String,
}

impl RegisterForm {
    pub fn check(&self) -> Result<(), FieldErrors> {
        self.validate().map_err(|e| {
            FieldErrors::from_validation(
                &e,
                &[
                    ("email", "Email wajib diisi"),
                    ("first_name", "Nama depan wajib diisi"),
                    ("last_name", "Nama belakang wajib diisi"),
                    ("password", "Password wajib diisi"),
                    ("confirm_password", "Konfirmasi password wajib diisi"),
                ],
            )
        })
    }

    /// 确认密码只在本地校验，不发给后端
    pub fn to_request(&self) -> RegistrationRequest {
        RegistrationRequest {
            email: self.email.trim().to_string(),
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            password: self.password.clone(),
        }
    }
}

// =========================================================
// 资料编辑
// =========================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct ProfileForm {
    #[validate(custom(function = "required"))]
    pub first_name: String,
    #[validate(custom(function = "required"))]
    pub last_name: String,
}

impl ProfileForm {
    pub fn check(&self) -> Result<(), FieldErrors> {
        self.validate().map_err(|e| {
            FieldErrors::from_validation(
                &e,
                &[
                    ("first_name", "Nama depan wajib diisi"),
                    ("last_name", "Nama belakang wajib diisi"),
                ],
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_register() -> RegisterForm {
        RegisterForm {
            email: "user@nutech.id".to_string(),
            first_name: "User".to_string(),
            last_name: "Nutech".to_string(),
            password: "short1".to_string(),
            confirm_password: "short1".to_string(),
        }
    }

    #[test]
    fn test_login_requires_fields() {
        let errors = LoginForm::default().check().unwrap_err();
        assert_eq!(errors.get("email"), Some("Email wajib diisi"));
        assert_eq!(errors.get("password"), Some("Password wajib diisi"));
    }

    #[test]
    fn test_login_email_format_and_password_length() {
        let form = LoginForm {
            email: "not-an-email".to_string(),
            password: "1234567".to_string(),
        };
        let errors = form.check().unwrap_err();
        assert_eq!(errors.get("email"), Some("Format email tidak valid"));
        assert_eq!(errors.get("password"), Some("Password minimal 8 karakter"));

        let form = LoginForm {
            email: "user@nutech.id".to_string(),
            password: "12345678".to_string(),
        };
        assert!(form.check().is_ok());
    }

    #[test]
    fn test_register_password_minimum_is_six() {
        assert!(valid_register().check().is_ok());

        let form = RegisterForm {
            password: "short".to_string(),
            confirm_password: "short".to_string(),
            ..valid_register()
        };
        let errors = form.check().unwrap_err();
        assert_eq!(errors.get("password"), Some("Password minimal 6 karakter"));
        assert!(!errors.contains("confirm_password"));
    }

    #[test]
    fn test_register_confirm_must_match() {
        let form = RegisterForm {
            confirm_password: "different1".to_string(),
            ..valid_register()
        };
        let errors = form.check().unwrap_err();
        assert_eq!(errors.fields().collect::<Vec<_>>(), vec!["confirm_password"]);
        assert_eq!(errors.get("confirm_password"), Some("Password tidak sama"));
    }

    #[test]
    fn test_register_requires_names() {
        let form = RegisterForm {
            first_name: "   ".to_string(),
            last_name: String::new(),
            ..valid_register()
        };
        let errors = form.check().unwrap_err();
        assert_eq!(errors.get("first_name"), Some("Nama depan wajib diisi"));
        assert_eq!(errors.get("last_name"), Some("Nama belakang wajib diisi"));
    }

    #[test]
    fn test_register_request_drops_confirmation() {
        let request = valid_register().to_request();
        assert_eq!(request.email, "user@nutech.id");
        assert_eq!(request.password, "short1");
    }

    #[test]
    fn test_profile_form_requires_both_names() {
        let form = ProfileForm {
            first_name: "A".to_string(),
            last_name: String::new(),
        };
        let errors = form.check().unwrap_err();
        assert!(errors.contains("last_name"));
        assert!(!errors.contains("first_name"));
    }
}
