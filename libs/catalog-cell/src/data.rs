//! Seed data for the clinic catalog. Constructed once at process start;
//! the running service never mutates any of it.

use crate::models::{
    ClinicInfo, Credential, DoctorProfile, Service, Testimonial, WeeklyHours,
};
use crate::services::catalog::Catalog;

pub fn clinic_catalog() -> Catalog {
    Catalog::new(
        doctor_profile(),
        services(),
        testimonials(),
        clinic_info(),
    )
}

fn doctor_profile() -> DoctorProfile {
    DoctorProfile {
        name: "BS. Lê Quang Vy".to_string(),
        title: "Tiến sĩ, Bác sĩ Chuyên khoa II".to_string(),
        specialty: "Tâm Thần Kinh".to_string(),
        sub_specialty: Some("Trị Liệu Tâm Lý & Rối Loạn Lo Âu".to_string()),
        bio: "Bác sĩ Lê Quang Vy là chuyên gia tâm thần kinh hàng đầu với hơn 15 năm kinh nghiệm trong lĩnh vực chẩn đoán và điều trị các rối loạn tâm thần, lo âu, trầm cảm và các bệnh lý thần kinh. Nguyên Trưởng khoa Tâm Thần Bệnh viện Chợ Rẫy, bác sĩ kết hợp y học hiện đại với liệu pháp tâm lý chuyên sâu, luôn đặt sức khỏe tinh thần của bệnh nhân lên hàng đầu.".to_string(),
        years_experience: 15,
        patients_served: 10000,
        success_rate: 96.5,
        image_url: "https://images.unsplash.com/photo-1612349317150-e413f6a5b16d?auto=format&fit=crop&q=80&w=1000".to_string(),
        credentials: vec![
            Credential {
                title: "Tiến sĩ Y khoa - Chuyên ngành Tâm Thần".to_string(),
                institution: "Đại học Y Dược TP.HCM".to_string(),
                year: 2008,
            },
            Credential {
                title: "Bác sĩ Nội trú - Tâm Thần Kinh".to_string(),
                institution: "Bệnh viện Chợ Rẫy".to_string(),
                year: 2011,
            },
            Credential {
                title: "Chuyên khoa II - Tâm Thần".to_string(),
                institution: "Bệnh viện Tâm Thần TP.HCM".to_string(),
                year: 2014,
            },
            Credential {
                title: "Chứng chỉ Tâm Lý Trị Liệu".to_string(),
                institution: "Hiệp hội Tâm Thần Hoa Kỳ (APA)".to_string(),
                year: 2015,
            },
        ],
        languages: vec!["Tiếng Việt".to_string(), "Tiếng Anh".to_string()],
    }
}

fn services() -> Vec<Service> {
    vec![
        Service {
            id: "srv_consult".to_string(),
            title: "Khám Tư Vấn Tâm Thần".to_string(),
            description: "Đánh giá toàn diện sức khỏe tâm thần bao gồm tiền sử bệnh, khám lâm sàng và lập kế hoạch điều trị cá nhân hóa.".to_string(),
            price_start: 500_000.0,
            duration_minutes: 60,
            icon: "brain".to_string(),
        },
        Service {
            id: "srv_depression".to_string(),
            title: "Điều Trị Trầm Cảm".to_string(),
            description: "Chẩn đoán và điều trị các rối loạn trầm cảm bằng kết hợp thuốc và liệu pháp tâm lý theo tiêu chuẩn quốc tế.".to_string(),
            price_start: 600_000.0,
            duration_minutes: 45,
            icon: "heart".to_string(),
        },
        Service {
            id: "srv_anxiety".to_string(),
            title: "Điều Trị Rối Loạn Lo Âu".to_string(),
            description: "Điều trị các rối loạn lo âu, hoảng sợ, ám ảnh cưỡng chế (OCD) và rối loạn stress sau sang chấn (PTSD).".to_string(),
            price_start: 600_000.0,
            duration_minutes: 45,
            icon: "shield".to_string(),
        },
        Service {
            id: "srv_sleep".to_string(),
            title: "Điều Trị Rối Loạn Giấc Ngủ".to_string(),
            description: "Chẩn đoán và điều trị mất ngủ, ngủ không sâu giấc, ác mộng và các rối loạn giấc ngủ khác.".to_string(),
            price_start: 500_000.0,
            duration_minutes: 45,
            icon: "moon".to_string(),
        },
        Service {
            id: "srv_therapy".to_string(),
            title: "Tâm Lý Trị Liệu".to_string(),
            description: "Liệu pháp CBT, DBT và các phương pháp trị liệu tâm lý hiện đại giúp thay đổi suy nghĩ và hành vi tiêu cực.".to_string(),
            price_start: 700_000.0,
            duration_minutes: 60,
            icon: "message".to_string(),
        },
        Service {
            id: "srv_child".to_string(),
            title: "Tâm Thần Nhi Khoa".to_string(),
            description: "Chẩn đoán và điều trị các rối loạn tâm thần ở trẻ em và thanh thiếu niên: ADHD, tự kỷ, rối loạn hành vi.".to_string(),
            price_start: 600_000.0,
            duration_minutes: 60,
            icon: "users".to_string(),
        },
    ]
}

// Display order is definition order, most recent first.
fn testimonials() -> Vec<Testimonial> {
    vec![
        Testimonial {
            id: "test_1".to_string(),
            patient_name: "Chị Minh T.".to_string(),
            patient_image: Some("https://images.unsplash.com/photo-1438761681033-6461ffad8d80?auto=format&fit=crop&q=80&w=200".to_string()),
            rating: 5,
            comment: "Tôi đã chiến đấu với trầm cảm suốt 3 năm trước khi gặp bác sĩ Hùng. Bác sĩ kiên nhẫn lắng nghe và xây dựng phác đồ điều trị phù hợp. Giờ tôi đã có thể sống vui vẻ trở lại.".to_string(),
            date: "2025-12-15".to_string(),
            treatment: "Điều Trị Trầm Cảm".to_string(),
        },
        Testimonial {
            id: "test_2".to_string(),
            patient_name: "Anh Tuấn L.".to_string(),
            patient_image: Some("https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?auto=format&fit=crop&q=80&w=200".to_string()),
            rating: 5,
            comment: "Cơn hoảng sợ làm tôi không thể đi làm. Bác sĩ Hùng đã giúp tôi hiểu nguyên nhân và cách kiểm soát. Sau 6 tháng điều trị, tôi đã trở lại cuộc sống bình thường.".to_string(),
            date: "2025-11-28".to_string(),
            treatment: "Điều Trị Rối Loạn Lo Âu".to_string(),
        },
        Testimonial {
            id: "test_3".to_string(),
            patient_name: "Phụ huynh bé Khoa".to_string(),
            patient_image: Some("https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?auto=format&fit=crop&q=80&w=200".to_string()),
            rating: 5,
            comment: "Con trai tôi được chẩn đoán ADHD khi 7 tuổi. Bác sĩ Hùng không chỉ điều trị cho con mà còn hướng dẫn gia đình cách hỗ trợ. Kết quả học tập của con cải thiện rõ rệt.".to_string(),
            date: "2025-10-10".to_string(),
            treatment: "Tâm Thần Nhi Khoa".to_string(),
        },
        Testimonial {
            id: "test_4".to_string(),
            patient_name: "Chị Hương M.".to_string(),
            patient_image: Some("https://images.unsplash.com/photo-1544005313-94ddf0286df2?auto=format&fit=crop&q=80&w=200".to_string()),
            rating: 5,
            comment: "Mất ngủ triền miên khiến tôi kiệt sức. Bác sĩ Hùng tìm ra nguyên nhân sâu xa và điều trị hiệu quả. Giờ tôi ngủ ngon mỗi đêm mà không cần thuốc ngủ.".to_string(),
            date: "2025-09-22".to_string(),
            treatment: "Điều Trị Rối Loạn Giấc Ngủ".to_string(),
        },
        Testimonial {
            id: "test_5".to_string(),
            patient_name: "Anh Phước N.".to_string(),
            patient_image: Some("https://images.unsplash.com/photo-1566492031773-4f4e44671857?auto=format&fit=crop&q=80&w=200".to_string()),
            rating: 5,
            comment: "Tôi từng nghĩ đến tâm thần là điều đáng xấu hổ. Bác sĩ Hùng đã thay đổi suy nghĩ đó. Phòng khám chuyên nghiệp, kín đáo và bác sĩ rất tận tâm.".to_string(),
            date: "2025-09-05".to_string(),
            treatment: "Khám Tư Vấn Tâm Thần".to_string(),
        },
        Testimonial {
            id: "test_6".to_string(),
            patient_name: "Chị Thu H.".to_string(),
            patient_image: Some("https://images.unsplash.com/photo-1580489944761-15a19d654956?auto=format&fit=crop&q=80&w=200".to_string()),
            rating: 5,
            comment: "Liệu pháp CBT với bác sĩ Hùng đã thay đổi cuộc sống tôi. Tôi học được cách nhận diện và thay đổi những suy nghĩ tiêu cực. Cảm ơn bác sĩ rất nhiều!".to_string(),
            date: "2025-08-18".to_string(),
            treatment: "Tâm Lý Trị Liệu".to_string(),
        },
        Testimonial {
            id: "test_7".to_string(),
            patient_name: "Anh Đức V.".to_string(),
            patient_image: Some("https://images.unsplash.com/photo-1500648767791-00dcc994a43e?auto=format&fit=crop&q=80&w=200".to_string()),
            rating: 5,
            comment: "Công việc áp lực khiến tôi bị burnout nghiêm trọng. Bác sĩ Hùng giúp tôi phục hồi và học cách cân bằng cuộc sống. Highly recommend!".to_string(),
            date: "2025-08-02".to_string(),
            treatment: "Khám Tư Vấn Tâm Thần".to_string(),
        },
        Testimonial {
            id: "test_8".to_string(),
            patient_name: "Bà Nga T.".to_string(),
            patient_image: Some("https://images.unsplash.com/photo-1559839734-2b71ea860485?auto=format&fit=crop&q=80&w=200".to_string()),
            rating: 5,
            comment: "Ở tuổi 65, tôi bị trầm cảm sau khi nghỉ hưu. Bác sĩ Hùng rất kiên nhẫn và thấu hiểu. Giờ tôi đã tìm lại niềm vui sống.".to_string(),
            date: "2025-07-20".to_string(),
            treatment: "Điều Trị Trầm Cảm".to_string(),
        },
        Testimonial {
            id: "test_9".to_string(),
            patient_name: "Anh Khoa N.".to_string(),
            patient_image: Some("https://images.unsplash.com/photo-1519085360753-af0119f7cbe7?auto=format&fit=crop&q=80&w=200".to_string()),
            rating: 4,
            comment: "Dịch vụ tốt, bác sĩ chuyên nghiệp. Chỉ tiếc là phải đặt lịch trước khá lâu vì phòng khám đông. Không gian riêng tư và thoải mái.".to_string(),
            date: "2025-07-05".to_string(),
            treatment: "Tâm Lý Trị Liệu".to_string(),
        },
        Testimonial {
            id: "test_10".to_string(),
            patient_name: "Chị Mai A.".to_string(),
            patient_image: Some("https://images.unsplash.com/photo-1487412720507-e7ab37603c6f?auto=format&fit=crop&q=80&w=200".to_string()),
            rating: 5,
            comment: "Bác sĩ Hùng đã giúp tôi vượt qua nỗi sợ xã hội. Giờ tôi có thể nói trước đám đông mà không còn run sợ. Cuộc sống thay đổi hoàn toàn!".to_string(),
            date: "2025-06-15".to_string(),
            treatment: "Điều Trị Rối Loạn Lo Âu".to_string(),
        },
    ]
}

fn clinic_info() -> ClinicInfo {
    ClinicInfo {
        name: "Phòng Khám Tâm Thần Kinh Bác Sĩ Lê Quang Vy".to_string(),
        address: "145 Trần Quang Khải, Phường Tân Định".to_string(),
        city: "Quận 1".to_string(),
        state: "TP. Hồ Chí Minh".to_string(),
        zip_code: "700000".to_string(),
        phone: "(028) 3844 5678".to_string(),
        email: "lienhe@phongkhamtamthan.vn".to_string(),
        hours: WeeklyHours {
            monday: "8:00 - 17:00".to_string(),
            tuesday: "8:00 - 17:00".to_string(),
            wednesday: "8:00 - 17:00".to_string(),
            thursday: "8:00 - 17:00".to_string(),
            friday: "8:00 - 17:00".to_string(),
            saturday: "8:00 - 12:00".to_string(),
            sunday: "Nghỉ".to_string(),
        },
        map_url: Some("https://maps.google.com/?q=Phu+Nhuan+HCMC".to_string()),
    }
}
