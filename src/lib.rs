#![forbid(unsafe_code)]

mod client_defaults;
mod codec;
mod error;
mod models;
mod okta;
#[cfg(feature = "async-client")]
mod okta_async;

pub use codec::{decode, decode_value, encode, encode_value};

pub use error::{ApiError, ApiErrorCause, Error};

pub use models::{
    AccessAction, ActivateFactorRequest, AnyFactor, AnyPolicy, AppAndInstancePolicyRuleCondition,
    AppInstanceRef, AppSignOnAction, ApplicationSettingsApplication, ApplicationSettingsNotes,
    ApplicationSettingsNotifications, ApplicationSettingsNotificationsVpn,
    ApplicationSettingsNotificationsVpnNetwork, Brand, CallUserFactor, CallUserFactorProfile,
    CustomUserFactor, DevicePolicyRuleCondition, DevicePolicyRuleConditionPlatform,
    EmailTemplate, EmailTemplateContent, EmailTemplateCustomization,
    EmailTemplateCustomizationRequest, EmailTemplateTestRequest, EmailUserFactor,
    EmailUserFactorProfile, EnrollAction, HardwareUserFactor, HardwareUserFactorProfile,
    HotpUserFactor, HotpUserFactorProfile, IdentityProviderPolicy,
    IdentityProviderPolicyRuleCondition, IdpPolicyRuleAction, IdpPolicyRuleActionProvider,
    ImageUploadResponse, IncludeExclude, MdmEnrollmentPolicyRuleCondition, OAuth2Client,
    PasswordPolicyAuthenticationProviderCondition, PlatformConditionEvaluatorPlatform,
    PlatformConditionOperatingSystem, PlatformPolicyRuleCondition, Policy, PolicyAccountLink,
    PolicyAccountLinkFilter, PolicyNetworkCondition, PolicyPeopleCondition, PolicyRule,
    PolicyRuleActions, PolicyRuleAuthContextCondition, PolicyRuleConditions, PolicySubject,
    PolicyUserNameTemplate, Provisioning, ProvisioningAction, ProvisioningConditions,
    ProvisioningGroups, PushUserFactor, PushUserFactorProfile, RiskPolicyRuleCondition,
    RiskScorePolicyRuleCondition, SamlApplicationSettings, SamlApplicationSettingsSignOn,
    SamlAttributeStatement, SecurityQuestion, SecurityQuestionUserFactor,
    SecurityQuestionUserFactorProfile, SignOnAction, SignOnSession, SmsUserFactor,
    SmsUserFactorProfile, SwaApplicationSettings, SwaApplicationSettingsApplication, Theme,
    ThemeResponse, TokenUserFactor, TokenUserFactorProfile, TotpUserFactor,
    TotpUserFactorProfile, TypedUserFactor, U2fUserFactor, U2fUserFactorProfile,
    UserFactor, UserIdentifierPattern, UserIdentifierPolicyRuleCondition,
    UserStatusPolicyRuleCondition, VerificationMethod, VerifyFactorRequest,
    VerifyUserFactorResponse, WebAuthnUserFactor, WebAuthnUserFactorProfile, WebUserFactor,
    WebUserFactorProfile,
};

pub use okta::{
    EmailTemplateListOptions, FactorEnrollOptions, FactorVerifyOptions, ImageUpload,
    OktaClient, OktaClientBuilder, PolicyCreateOptions, PolicyGetOptions, PolicyListOptions,
};
#[cfg(feature = "async-client")]
pub use okta_async::{OktaAsyncClient, OktaAsyncClientBuilder};
