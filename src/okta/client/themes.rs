use super::OktaClient;
use crate::error::Error;
use crate::models::{ImageUploadResponse, Theme, ThemeResponse};
use crate::okta::ImageUpload;

const BACKGROUND_IMAGE: &str = "background-image";
const FAVICON: &str = "favicon";
const LOGO: &str = "logo";

impl OktaClient {
    pub fn list_brand_themes(&self, brand_id: &str) -> Result<Vec<ThemeResponse>, Error> {
        let url = self.build_url(&["brands", brand_id, "themes"])?;
        let req = self.http.get(url);
        let resp = self.send(req)?;
        self.expect_ok_json(resp)
    }

    pub fn get_brand_theme(&self, brand_id: &str, theme_id: &str) -> Result<ThemeResponse, Error> {
        let url = self.build_url(&["brands", brand_id, "themes", theme_id])?;
        let req = self.http.get(url);
        let resp = self.send(req)?;
        self.expect_ok_json(resp)
    }

    pub fn update_brand_theme(
        &self,
        brand_id: &str,
        theme_id: &str,
        theme: &Theme,
    ) -> Result<ThemeResponse, Error> {
        let url = self.build_url(&["brands", brand_id, "themes", theme_id])?;
        let req = self.json_body(self.http.put(url), theme)?;
        let resp = self.send(req)?;
        self.expect_ok_json(resp)
    }

    pub fn upload_brand_theme_background_image(
        &self,
        brand_id: &str,
        theme_id: &str,
        image: ImageUpload,
    ) -> Result<ImageUploadResponse, Error> {
        self.upload_theme_image(brand_id, theme_id, BACKGROUND_IMAGE, image)
    }

    pub fn delete_brand_theme_background_image(
        &self,
        brand_id: &str,
        theme_id: &str,
    ) -> Result<(), Error> {
        self.delete_theme_image(brand_id, theme_id, BACKGROUND_IMAGE)
    }

    pub fn upload_brand_theme_favicon(
        &self,
        brand_id: &str,
        theme_id: &str,
        image: ImageUpload,
    ) -> Result<ImageUploadResponse, Error> {
        self.upload_theme_image(brand_id, theme_id, FAVICON, image)
    }

    pub fn delete_brand_theme_favicon(&self, brand_id: &str, theme_id: &str) -> Result<(), Error> {
        self.delete_theme_image(brand_id, theme_id, FAVICON)
    }

    pub fn upload_brand_theme_logo(
        &self,
        brand_id: &str,
        theme_id: &str,
        image: ImageUpload,
    ) -> Result<ImageUploadResponse, Error> {
        self.upload_theme_image(brand_id, theme_id, LOGO, image)
    }

    pub fn delete_brand_theme_logo(&self, brand_id: &str, theme_id: &str) -> Result<(), Error> {
        self.delete_theme_image(brand_id, theme_id, LOGO)
    }

    fn upload_theme_image(
        &self,
        brand_id: &str,
        theme_id: &str,
        kind: &str,
        image: ImageUpload,
    ) -> Result<ImageUploadResponse, Error> {
        let url = self.build_url(&["brands", brand_id, "themes", theme_id, kind])?;
        let req = self.http.post(url).multipart(self.image_form(image)?);
        let resp = self.send(req)?;
        self.expect_ok_json(resp)
    }

    fn delete_theme_image(&self, brand_id: &str, theme_id: &str, kind: &str) -> Result<(), Error> {
        let url = self.build_url(&["brands", brand_id, "themes", theme_id, kind])?;
        let req = self.http.delete(url);
        let resp = self.send(req)?;
        self.expect_no_content(resp)
    }
}
