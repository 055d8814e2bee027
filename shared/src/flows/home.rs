//! 首页数据：服务目录与横幅一起加载

use serde::{Deserialize, Serialize};

use super::Effect;
use crate::client::PpobApi;
use crate::request::HttpClient;
use crate::route::AppRoute;
use crate::{Banner, ServiceItem};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HomeData {
    pub services: Vec<ServiceItem>,
    pub banners: Vec<Banner>,
}

/// 任一请求失败时两者都为空，只记录日志
pub async fn load_home<C: HttpClient>(api: &PpobApi<C>) -> HomeData {
    let (services, banners) = futures::join!(api.services(), api.banners());
    match (services, banners) {
        (Ok(services), Ok(banners)) => HomeData { services, banners },
        (Err(e), _) | (_, Err(e)) => {
            log::error!("failed to load home data: {}", e);
            HomeData::default()
        }
    }
}

pub fn open_service(service: &ServiceItem) -> Effect {
    Effect::Navigate(AppRoute::Purchase(service.service_code.clone()))
}
