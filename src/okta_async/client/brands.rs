use super::OktaAsyncClient;
use crate::error::Error;
use crate::models::Brand;

impl OktaAsyncClient {
    /// Lists all brands in the org.
    pub async fn list_brands(&self) -> Result<Vec<Brand>, Error> {
        let url = self.build_url(&["brands"])?;
        let req = self.http.get(url);
        let resp = self.send(req).await?;
        self.expect_ok_json(resp).await
    }

    pub async fn get_brand(&self, brand_id: &str) -> Result<Brand, Error> {
        let url = self.build_url(&["brands", brand_id])?;
        let req = self.http.get(url);
        let resp = self.send(req).await?;
        self.expect_ok_json(resp).await
    }

    pub async fn update_brand(&self, brand_id: &str, brand: &Brand) -> Result<Brand, Error> {
        let url = self.build_url(&["brands", brand_id])?;
        let req = self.json_body(self.http.put(url), brand)?;
        let resp = self.send(req).await?;
        self.expect_ok_json(resp).await
    }
}
