//! Static site configuration.
//!
//! Everything here is inert presentational data: the brand name, the
//! author's contact addresses, and the generated showcase imagery the page
//! displays. None of it is validated or negotiated at runtime.

pub const BRAND: &str = "AI Cutout";
pub const TAGLINE: &str = "An AI-powered background removal tool that runs on your own machine";

pub const AUTHOR_NAME: &str = "Beishan";
pub const CONTACT_EMAIL: &str = "blacklaw@foxmail.com";
pub const CONTACT_WECHAT: &str = "BEISHAN5678";

pub fn mailto_href() -> String {
    format!("mailto:{}", CONTACT_EMAIL)
}

pub fn wechat_href() -> String {
    format!("wechat:{}", CONTACT_WECHAT)
}

/// Showcase imagery, generated once and referenced by URL.
pub mod images {
    pub const HERO: &str = "https://space.coze.cn/api/coze_space/gen_image?image_size=landscape_16_9&prompt=AI%20image%20background%20removal%20tool%2C%20digital%20art%2C%20modern%20interface%2C%20professional%20software&sign=8ae882d60cbd0465c3dbe707af01fdbf";
    pub const FEATURE_CUTOUT: &str = "https://space.coze.cn/api/coze_space/gen_image?image_size=square&prompt=Smart%20background%20removal%20technology%2C%20AI%20algorithm%2C%20digital%20art&sign=ba0e2a60714ba1cc7be7c6397c32bde4";
    pub const FEATURE_PORTRAIT: &str = "https://space.coze.cn/api/coze_space/gen_image?image_size=square&prompt=Portrait%20optimization%20feature%2C%20professional%20photo%20editing&sign=d30e54cc566d9f661cc72646e26bb0cc";
    pub const FEATURE_FORMATS: &str = "https://space.coze.cn/api/coze_space/gen_image?image_size=square&prompt=Multiple%20image%20format%20support%2C%20file%20types%20concept&sign=ebb2fb6e0630a8b2cceb571d997de9f7";
    pub const FEATURE_PREVIEW: &str = "https://space.coze.cn/api/coze_space/gen_image?image_size=square&prompt=Real-time%20preview%20interface%2C%20digital%20design&sign=3cbe03dc084502571d52274c56d3777c";
    pub const FEATURE_EXPORT: &str = "https://space.coze.cn/api/coze_space/gen_image?image_size=square&prompt=One-click%20download%20function%2C%20user%20experience%20design&sign=41e6eb92b46f3c0900ac64bb3e7f4eda";
    pub const FEATURE_BATCH: &str = "https://space.coze.cn/api/coze_space/gen_image?image_size=square&prompt=Batch%20image%20processing%20and%20automatic%20packaging%2C%20file%20compression%20concept&sign=398d29e7a04364809583e698bb236d61";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contact_hrefs_carry_the_raw_addresses() {
        assert_eq!(mailto_href(), "mailto:blacklaw@foxmail.com");
        assert_eq!(wechat_href(), "wechat:BEISHAN5678");
    }
}
