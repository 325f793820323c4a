use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::TeacherService;
use crate::models::{ApiResponse, ErrorCode, teachers::requests::CreateTeacherRequest};
use crate::services::{current_tenant, internal_error, validation_error};
use crate::utils::password::hash_password;
use crate::utils::validate::{validate_code, validate_email, validate_password, validate_required};

fn validate(teacher_data: &CreateTeacherRequest) -> Result<(), String> {
    validate_required("name", &teacher_data.name)?;
    validate_email(&teacher_data.email)?;
    validate_code("employee_id", &teacher_data.employee_id)?;
    validate_required("department", &teacher_data.department)?;
    validate_password(&teacher_data.password)
}

pub async fn create_teacher(
    service: &TeacherService,
    mut teacher_data: CreateTeacherRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let tenant = current_tenant(request)?;

    teacher_data.email = teacher_data.email.trim().to_lowercase();
    if let Err(msg) = validate(&teacher_data) {
        return Ok(validation_error(msg));
    }

    teacher_data.password = match hash_password(&teacher_data.password) {
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

    match storage.create_teacher(tenant.college_id, teacher_data).await {
        Ok(teacher) => Ok(HttpResponse::Created()
            .json(ApiResponse::success(teacher, "Teacher created successfully"))),
        Err(e) if e.is_conflict() => Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
            ErrorCode::TeacherAlreadyExists,
            "Email or employee id already exists",
        ))),
        Err(e) => Ok(internal_error(
            ErrorCode::TeacherCreationFailed,
            "Teacher creation failed",
            &e,
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_employee_id_with_spaces_rejected() {
        let req = CreateTeacherRequest {
            name: "R. Iyer".to_string(),
            email: "iyer@college.test".to_string(),
            password: "Str0ngPass".to_string(),
            employee_id: "EMP 01".to_string(),
            department: "Physics".to_string(),
            designation: None,
            qualification: None,
            joining_date: None,
            gender: None,
            date_of_birth: None,
        };
        assert!(validate(&req).is_err());
    }
}
