use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::StudentService;
use crate::models::{ApiResponse, ErrorCode, students::requests::CreateStudentRequest};
use crate::services::{current_tenant, internal_error, validation_error};
use crate::utils::password::hash_password;
use crate::utils::validate::{
    validate_code, validate_email, validate_password, validate_required, validate_year_of_study,
};

fn validate(student_data: &CreateStudentRequest) -> Result<(), String> {
    validate_required("name", &student_data.name)?;
    validate_email(&student_data.email)?;
    validate_code("enrollment_number", &student_data.enrollment_number)?;
    validate_required("program", &student_data.program)?;
    validate_year_of_study(student_data.year_of_study)?;
    validate_password(&student_data.password)
}

pub async fn create_student(
    service: &StudentService,
    mut student_data: CreateStudentRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let tenant = current_tenant(request)?;

    student_data.email = student_data.email.trim().to_lowercase();
    if let Err(msg) = validate(&student_data) {
        return Ok(validation_error(msg));
    }

    student_data.password = match hash_password(&student_data.password) {
        Ok(hash) => hash,
        Err(e) => {
            return Ok(internal_error(
                ErrorCode::InternalServerError,
                "Password hashing failed",
                &e,
            ));
        }
    };

    let storage = service.get_storage(request)?;

    match storage.create_student(tenant.college_id, student_data).await {
        Ok(student) => Ok(HttpResponse::Created()
            .json(ApiResponse::success(student, "Student created successfully"))),
        Err(e) if e.is_conflict() => Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
            ErrorCode::StudentAlreadyExists,
            "Email or enrollment number already exists",
        ))),
        Err(e) => Ok(internal_error(
            ErrorCode::StudentCreationFailed,
            "Student creation failed",
            &e,
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> CreateStudentRequest {
        CreateStudentRequest {
            name: "Asha Rao".to_string(),
            email: "asha@college.test".to_string(),
            password: "Str0ngPass".to_string(),
            enrollment_number: "ENR-001".to_string(),
            program: "B.Sc".to_string(),
            year_of_study: 2,
            section: Some("A".to_string()),
            date_of_birth: None,
            gender: None,
            admission_date: None,
        }
    }

    #[test]
    fn test_valid_request_passes() {
        assert!(validate(&request()).is_ok());
    }

    #[test]
    fn test_year_out_of_range_rejected() {
        let mut req = request();
        req.year_of_study = 11;
        assert!(validate(&req).is_err());
    }

    #[test]
    fn test_blank_program_rejected() {
        let mut req = request();
        req.program = "  ".to_string();
        assert_eq!(validate(&req).unwrap_err(), "program must not be empty");
    }
}
