use super::OktaClient;
use crate::error::Error;
use crate::models::{
    EmailTemplate, EmailTemplateContent, EmailTemplateCustomization,
    EmailTemplateCustomizationRequest, EmailTemplateTestRequest,
};
use crate::okta::common;
use crate::okta::EmailTemplateListOptions;

impl OktaClient {
    /// Lists the email templates of a brand.
    pub fn list_email_templates(
        &self,
        brand_id: &str,
        options: &EmailTemplateListOptions,
    ) -> Result<Vec<EmailTemplate>, Error> {
        let url = self.build_url(&["brands", brand_id, "templates", "email"])?;
        let mut req = self.http.get(url);
        req = common::apply_query_params(req, options.to_query_pairs());
        let resp = self.send(req)?;
        self.expect_ok_json(resp)
    }

    pub fn get_email_template(
        &self,
        brand_id: &str,
        template_name: &str,
    ) -> Result<EmailTemplate, Error> {
        let url = self.build_url(&["brands", brand_id, "templates", "email", template_name])?;
        let req = self.http.get(url);
        let resp = self.send(req)?;
        self.expect_ok_json(resp)
    }

    pub fn list_email_template_customizations(
        &self,
        brand_id: &str,
        template_name: &str,
    ) -> Result<Vec<EmailTemplateCustomization>, Error> {
        let url = self.customizations_url(brand_id, template_name, &[])?;
        let req = self.http.get(url);
        let resp = self.send(req)?;
        self.expect_ok_json(resp)
    }

    pub fn create_email_template_customization(
        &self,
        brand_id: &str,
        template_name: &str,
        customization: &EmailTemplateCustomizationRequest,
    ) -> Result<EmailTemplateCustomization, Error> {
        let url = self.customizations_url(brand_id, template_name, &[])?;
        let req = self.json_body(self.http.post(url), customization)?;
        let resp = self.send(req)?;
        self.expect_ok_json(resp)
    }

    /// Deletes every customization of a template.
    pub fn delete_email_template_customizations(
        &self,
        brand_id: &str,
        template_name: &str,
    ) -> Result<(), Error> {
        let url = self.customizations_url(brand_id, template_name, &[])?;
        let req = self.http.delete(url);
        let resp = self.send(req)?;
        self.expect_no_content(resp)
    }

    pub fn get_email_template_customization(
        &self,
        brand_id: &str,
        template_name: &str,
        customization_id: &str,
    ) -> Result<EmailTemplateCustomization, Error> {
        let url = self.customizations_url(brand_id, template_name, &[customization_id])?;
        let req = self.http.get(url);
        let resp = self.send(req)?;
        self.expect_ok_json(resp)
    }

    pub fn update_email_template_customization(
        &self,
        brand_id: &str,
        template_name: &str,
        customization_id: &str,
        customization: &EmailTemplateCustomizationRequest,
    ) -> Result<EmailTemplateCustomization, Error> {
        let url = self.customizations_url(brand_id, template_name, &[customization_id])?;
        let req = self.json_body(self.http.put(url), customization)?;
        let resp = self.send(req)?;
        self.expect_ok_json(resp)
    }

    pub fn delete_email_template_customization(
        &self,
        brand_id: &str,
        template_name: &str,
        customization_id: &str,
    ) -> Result<(), Error> {
        let url = self.customizations_url(brand_id, template_name, &[customization_id])?;
        let req = self.http.delete(url);
        let resp = self.send(req)?;
        self.expect_no_content(resp)
    }

    /// Renders a customization with sample values.
    pub fn get_email_template_customization_preview(
        &self,
        brand_id: &str,
        template_name: &str,
        customization_id: &str,
    ) -> Result<EmailTemplateContent, Error> {
        let url =
            self.customizations_url(brand_id, template_name, &[customization_id, "preview"])?;
        let req = self.http.get(url);
        let resp = self.send(req)?;
        self.expect_ok_json(resp)
    }

    pub fn get_email_template_default_content(
        &self,
        brand_id: &str,
        template_name: &str,
    ) -> Result<EmailTemplateContent, Error> {
        let url = self.build_url(&[
            "brands",
            brand_id,
            "templates",
            "email",
            template_name,
            "default-content",
        ])?;
        let req = self.http.get(url);
        let resp = self.send(req)?;
        self.expect_ok_json(resp)
    }

    pub fn get_email_template_default_content_preview(
        &self,
        brand_id: &str,
        template_name: &str,
    ) -> Result<EmailTemplateContent, Error> {
        let url = self.build_url(&[
            "brands",
            brand_id,
            "templates",
            "email",
            template_name,
            "default-content",
            "preview",
        ])?;
        let req = self.http.get(url);
        let resp = self.send(req)?;
        self.expect_ok_json(resp)
    }

    /// Sends a test message of the template to the current API user.
    pub fn send_test_email(
        &self,
        brand_id: &str,
        template_name: &str,
        request: &EmailTemplateTestRequest,
    ) -> Result<(), Error> {
        let url =
            self.build_url(&["brands", brand_id, "templates", "email", template_name, "test"])?;
        let req = self.json_body(self.http.post(url), request)?;
        let resp = self.send(req)?;
        self.expect_no_content(resp)
    }

    fn customizations_url(
        &self,
        brand_id: &str,
        template_name: &str,
        rest: &[&str],
    ) -> Result<url::Url, Error> {
        let mut segments = vec![
            "brands",
            brand_id,
            "templates",
            "email",
            template_name,
            "customizations",
        ];
        segments.extend_from_slice(rest);
        self.build_url(&segments)
    }
}
